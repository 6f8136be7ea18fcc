use std::sync::Arc;

use flexprice_domain::{
    CancelSubscriptionRequest, CreateSubscriptionRequest, ListSubscriptionsParams,
    ListSubscriptionsResponse, PauseSubscriptionRequest, ResumeSubscriptionRequest,
    SubscriptionResponse, ToQuery,
};
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/subscriptions`
#[derive(Clone)]
pub struct SubscriptionsApi {
    client: Arc<ApiClient>,
}

impl SubscriptionsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, plan_id = %request.plan_id))]
    pub async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.client.post("/subscriptions", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<SubscriptionResponse, ApiError> {
        self.client.get(&format!("/subscriptions/{}", encode(id))).await
    }

    #[instrument(skip(self, request), fields(cancellation_type = %request.cancellation_type))]
    pub async fn cancel(
        &self,
        id: &str,
        request: &CancelSubscriptionRequest,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.client.post(&format!("/subscriptions/{}/cancel", encode(id)), request).await
    }

    #[instrument(skip(self, request), fields(pause_mode = %request.pause_mode))]
    pub async fn pause(
        &self,
        id: &str,
        request: &PauseSubscriptionRequest,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.client.post(&format!("/subscriptions/{}/pause", encode(id)), request).await
    }

    #[instrument(skip(self, request), fields(resume_mode = %request.resume_mode))]
    pub async fn resume(
        &self,
        id: &str,
        request: &ResumeSubscriptionRequest,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.client.post(&format!("/subscriptions/{}/resume", encode(id)), request).await
    }

    #[instrument(skip(self, params))]
    pub async fn list(
        &self,
        params: &ListSubscriptionsParams,
    ) -> Result<ListSubscriptionsResponse, ApiError> {
        self.client.get_with_query("/subscriptions", &params.to_query()).await
    }
}

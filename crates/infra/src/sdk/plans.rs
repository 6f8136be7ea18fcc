use std::sync::Arc;

use flexprice_domain::{
    CreatePlanRequest, ListPlansParams, ListPlansResponse, PlanResponse, ToQuery,
    UpdatePlanRequest,
};
use serde::de::IgnoredAny;
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/plans`
#[derive(Clone)]
pub struct PlansApi {
    client: Arc<ApiClient>,
}

impl PlansApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: &CreatePlanRequest) -> Result<PlanResponse, ApiError> {
        self.client.post("/plans", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<PlanResponse, ApiError> {
        self.client.get(&format!("/plans/{}", encode(id))).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: &str, request: &UpdatePlanRequest) -> Result<PlanResponse, ApiError> {
        self.client.put(&format!("/plans/{}", encode(id)), request).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.delete(&format!("/plans/{}", encode(id))).await?;
        Ok(())
    }

    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListPlansParams) -> Result<ListPlansResponse, ApiError> {
        self.client.get_with_query("/plans", &params.to_query()).await
    }
}

use std::sync::Arc;

use flexprice_domain::{
    CreateEntitlementRequest, EntitlementResponse, ListEntitlementsParams,
    ListEntitlementsResponse, ToQuery,
};
use serde::de::IgnoredAny;
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for plan entitlements
#[derive(Clone)]
pub struct EntitlementsApi {
    client: Arc<ApiClient>,
}

impl EntitlementsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(plan_id = %request.plan_id, feature_id = %request.feature_id))]
    pub async fn create(
        &self,
        request: &CreateEntitlementRequest,
    ) -> Result<EntitlementResponse, ApiError> {
        self.client.post("/entitlements", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<EntitlementResponse, ApiError> {
        self.client.get(&format!("/entitlements/{}", encode(id))).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.delete(&format!("/entitlements/{}", encode(id))).await?;
        Ok(())
    }

    #[instrument(skip(self, params))]
    pub async fn list(
        &self,
        params: &ListEntitlementsParams,
    ) -> Result<ListEntitlementsResponse, ApiError> {
        self.client.get_with_query("/entitlements", &params.to_query()).await
    }
}

use std::sync::Arc;

use flexprice_domain::{
    CreateFeatureRequest, FeatureResponse, ListFeaturesParams, ListFeaturesResponse, ToQuery,
    UpdateFeatureRequest,
};
use serde::de::IgnoredAny;
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/features`
#[derive(Clone)]
pub struct FeaturesApi {
    client: Arc<ApiClient>,
}

impl FeaturesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Metered features carry their meter definition inline.
    #[instrument(skip(self, request), fields(name = %request.name, kind = %request.feature_type))]
    pub async fn create(&self, request: &CreateFeatureRequest) -> Result<FeatureResponse, ApiError> {
        self.client.post("/features", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<FeatureResponse, ApiError> {
        self.client.get(&format!("/features/{}", encode(id))).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateFeatureRequest,
    ) -> Result<FeatureResponse, ApiError> {
        self.client.put(&format!("/features/{}", encode(id)), request).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.delete(&format!("/features/{}", encode(id))).await?;
        Ok(())
    }

    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListFeaturesParams) -> Result<ListFeaturesResponse, ApiError> {
        self.client.get_with_query("/features", &params.to_query()).await
    }
}

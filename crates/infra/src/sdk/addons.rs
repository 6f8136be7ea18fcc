use std::sync::Arc;

use flexprice_domain::{AddonResponse, CreateAddonRequest, ListAddonsParams, ListAddonsResponse, ToQuery};
use serde::de::IgnoredAny;
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/addons`
#[derive(Clone)]
pub struct AddonsApi {
    client: Arc<ApiClient>,
}

impl AddonsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(lookup_key = %request.lookup_key))]
    pub async fn create(&self, request: &CreateAddonRequest) -> Result<AddonResponse, ApiError> {
        self.client.post("/addons", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<AddonResponse, ApiError> {
        self.client.get(&format!("/addons/{}", encode(id))).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.delete(&format!("/addons/{}", encode(id))).await?;
        Ok(())
    }

    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListAddonsParams) -> Result<ListAddonsResponse, ApiError> {
        self.client.get_with_query("/addons", &params.to_query()).await
    }
}

use std::sync::Arc;

use flexprice_domain::{
    CreateCustomerRequest, CustomerEntitlementsResponse, CustomerResponse,
    CustomerUsageParams, CustomerUsageSummaryResponse, ListCustomersParams,
    ListCustomersResponse, ToQuery, UpdateCustomerRequest,
};
use serde::de::IgnoredAny;
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/customers`
#[derive(Clone)]
pub struct CustomersApi {
    client: Arc<ApiClient>,
}

impl CustomersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(external_id = %request.external_id))]
    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<CustomerResponse, ApiError> {
        self.client.post("/customers", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<CustomerResponse, ApiError> {
        self.client.get(&format!("/customers/{}", encode(id))).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<CustomerResponse, ApiError> {
        self.client.put(&format!("/customers/{}", encode(id)), request).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.delete(&format!("/customers/{}", encode(id))).await?;
        Ok(())
    }

    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListCustomersParams) -> Result<ListCustomersResponse, ApiError> {
        self.client.get_with_query("/customers", &params.to_query()).await
    }

    /// Usage summary per feature for one customer
    #[instrument(skip(self, params))]
    pub async fn usage(
        &self,
        id: &str,
        params: &CustomerUsageParams,
    ) -> Result<CustomerUsageSummaryResponse, ApiError> {
        let path = format!("/customers/{}/usage", encode(id));
        self.client.get_with_query(&path, &params.to_query()).await
    }

    #[instrument(skip(self, params))]
    pub async fn entitlements(
        &self,
        id: &str,
        params: &CustomerUsageParams,
    ) -> Result<CustomerEntitlementsResponse, ApiError> {
        let path = format!("/customers/{}/entitlements", encode(id));
        self.client.get_with_query(&path, &params.to_query()).await
    }
}

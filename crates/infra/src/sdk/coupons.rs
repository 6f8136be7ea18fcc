use std::sync::Arc;

use flexprice_domain::{CouponResponse, CreateCouponRequest, ListCouponsParams, ListCouponsResponse, ToQuery};
use serde::de::IgnoredAny;
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/coupons`
#[derive(Clone)]
pub struct CouponsApi {
    client: Arc<ApiClient>,
}

impl CouponsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(name = %request.name, cadence = %request.cadence))]
    pub async fn create(&self, request: &CreateCouponRequest) -> Result<CouponResponse, ApiError> {
        self.client.post("/coupons", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<CouponResponse, ApiError> {
        self.client.get(&format!("/coupons/{}", encode(id))).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.delete(&format!("/coupons/{}", encode(id))).await?;
        Ok(())
    }

    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListCouponsParams) -> Result<ListCouponsResponse, ApiError> {
        self.client.get_with_query("/coupons", &params.to_query()).await
    }
}

use std::sync::Arc;

use flexprice_domain::{
    CreateInvoiceRequest, InvoiceResponse, ListInvoicesParams, ListInvoicesResponse, ToQuery,
    UpdateInvoiceRequest,
};
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/invoices`
///
/// The backend offers no invoice deletion; drafts are voided instead.
#[derive(Clone)]
pub struct InvoicesApi {
    client: Arc<ApiClient>,
}

impl InvoicesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(customer_id = %request.customer_id))]
    pub async fn create(&self, request: &CreateInvoiceRequest) -> Result<InvoiceResponse, ApiError> {
        self.client.post("/invoices", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<InvoiceResponse, ApiError> {
        self.client.get(&format!("/invoices/{}", encode(id))).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateInvoiceRequest,
    ) -> Result<InvoiceResponse, ApiError> {
        self.client.put(&format!("/invoices/{}", encode(id)), request).await
    }

    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListInvoicesParams) -> Result<ListInvoicesResponse, ApiError> {
        self.client.get_with_query("/invoices", &params.to_query()).await
    }
}

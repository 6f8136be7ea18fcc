use std::sync::Arc;

use flexprice_domain::{
    CreateCreditNoteRequest, CreditNoteResponse, ListCreditNotesParams, ListCreditNotesResponse,
    ToQuery,
};
use serde_json::{Map, Value};
use tracing::instrument;
use urlencoding::encode;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/creditnotes`
///
/// Credit notes are created as drafts. Finalizing applies them to the
/// invoice; voiding discards a draft.
#[derive(Clone)]
pub struct CreditNotesApi {
    client: Arc<ApiClient>,
}

impl CreditNotesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(invoice_id = %request.invoice_id, reason = %request.reason))]
    pub async fn create(
        &self,
        request: &CreateCreditNoteRequest,
    ) -> Result<CreditNoteResponse, ApiError> {
        self.client.post("/creditnotes", request).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<CreditNoteResponse, ApiError> {
        self.client.get(&format!("/creditnotes/{}", encode(id))).await
    }

    #[instrument(skip(self, params))]
    pub async fn list(
        &self,
        params: &ListCreditNotesParams,
    ) -> Result<ListCreditNotesResponse, ApiError> {
        self.client.get_with_query("/creditnotes", &params.to_query()).await
    }

    #[instrument(skip(self))]
    pub async fn finalize(&self, id: &str) -> Result<CreditNoteResponse, ApiError> {
        let path = format!("/creditnotes/{}/finalize", encode(id));
        self.client.post(&path, &Map::<String, Value>::new()).await
    }

    #[instrument(skip(self))]
    pub async fn void(&self, id: &str) -> Result<CreditNoteResponse, ApiError> {
        let path = format!("/creditnotes/{}/void", encode(id));
        self.client.post(&path, &Map::<String, Value>::new()).await
    }
}

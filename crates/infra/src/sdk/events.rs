//! Event ingestion and usage queries

use std::sync::Arc;

use flexprice_domain::{
    BulkIngestEventRequest, GetEventsRequest, GetEventsResponse, GetUsageAnalyticsRequest,
    GetUsageAnalyticsResponse, GetUsageRequest, GetUsageResponse, IngestEventRequest,
};
use serde::de::IgnoredAny;
use tracing::{debug, instrument};

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/events`
#[derive(Clone)]
pub struct EventsApi {
    client: Arc<ApiClient>,
}

impl EventsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Ingest a single event. The backend accepts it asynchronously.
    #[instrument(skip(self, event), fields(event_name = %event.event_name))]
    pub async fn ingest(&self, event: &IngestEventRequest) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.post("/events", event).await?;
        debug!("event accepted");
        Ok(())
    }

    /// Ingest many events in one call. Batching semantics belong to the backend.
    #[instrument(skip(self, request), fields(count = request.events.len()))]
    pub async fn ingest_bulk(&self, request: &BulkIngestEventRequest) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.post("/events/bulk", request).await?;
        debug!("bulk events accepted");
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub async fn query(&self, request: &GetEventsRequest) -> Result<GetEventsResponse, ApiError> {
        self.client.post("/events/query", request).await
    }

    #[instrument(skip(self, request), fields(event_name = %request.event_name))]
    pub async fn usage(&self, request: &GetUsageRequest) -> Result<GetUsageResponse, ApiError> {
        self.client.post("/events/usage", request).await
    }

    #[instrument(skip(self, request), fields(customer = %request.external_customer_id))]
    pub async fn usage_analytics(
        &self,
        request: &GetUsageAnalyticsRequest,
    ) -> Result<GetUsageAnalyticsResponse, ApiError> {
        self.client.post("/events/analytics", request).await
    }
}

//! Cursor pagination over event queries

use flexprice_domain::{GetEventsRequest, GetEventsResponse};
use tracing::{debug, warn};

use super::FlexPrice;
use crate::api::ApiError;

/// Walks `query_events` pages using `iter_last_key` and `has_more`.
///
/// The cursor only advances after a successful page, so a failed call can be
/// retried by calling [`next_page`](Self::next_page) again.
#[derive(Debug, Clone)]
pub struct EventCursor {
    request: GetEventsRequest,
    last_key: Option<String>,
    has_more: bool,
}

impl EventCursor {
    /// Any cursor keys already set on `request` are ignored.
    pub fn new(mut request: GetEventsRequest) -> Self {
        request.iter_first_key = None;
        request.iter_last_key = None;
        Self { request, last_key: None, has_more: true }
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    /// Start again from the newest events.
    pub fn reset(&mut self) {
        self.last_key = None;
        self.has_more = true;
    }

    /// Fetch the next page, or `None` once the backend reports no more events.
    pub async fn next_page(
        &mut self,
        flexprice: &FlexPrice,
    ) -> Result<Option<GetEventsResponse>, ApiError> {
        if !self.has_more {
            return Ok(None);
        }

        let mut request = self.request.clone();
        request.iter_last_key = self.last_key.clone();
        let page = flexprice.query_events(&request).await?;

        let next_key = page.iter_last_key.clone().filter(|key| !key.is_empty());
        self.has_more = match (&next_key, page.has_more) {
            (Some(key), true) if self.last_key.as_ref() != Some(key) => true,
            (_, true) => {
                warn!(key = ?next_key, "backend reported more events without a new cursor key");
                false
            }
            (_, false) => false,
        };
        if next_key.is_some() {
            self.last_key = next_key;
        }

        debug!(count = page.events.len(), has_more = self.has_more, "events page fetched");
        Ok(Some(page))
    }
}

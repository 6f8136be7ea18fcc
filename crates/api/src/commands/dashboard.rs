//! Analytics page commands
//!
//! Every call goes through the [`SessionGuard`](flexprice_infra::SessionGuard)
//! so a rejected credential sends the host to the login screen while the
//! caller still receives the original error.

use std::time::Instant;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use flexprice_domain::constants::{DEFAULT_EVENTS_PAGE_SIZE, LLM_USAGE_EVENT};
use flexprice_domain::{
    AggregationType, CustomerUsageParams, CustomerUsageSummaryResponse, GetEventsRequest,
    GetEventsResponse, GetUsageRequest, GetUsageResponse, WindowSize,
};
use flexprice_infra::{ApiError, EventCursor};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;
use crate::utils::logging::log_command_execution;

/// Window shown by the analytics page
pub const LOOKBACK_DAYS: i64 = 7;

const DEMO_MODELS: [&str; 3] = ["gpt-4", "gpt-3.5-turbo", "claude-3-sonnet"];

/// What was sent by [`fire_usage_event`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEventReceipt {
    pub external_customer_id: String,
    pub model: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatus {
    pub authenticated: bool,
    pub sdk_configured: bool,
    pub api_base_url: String,
    pub sdk_base_path: String,
    pub login_path: String,
    pub health: HealthStatus,
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fire one `llm_usage` event with a random model and token counts.
pub async fn fire_usage_event(
    context: &AppContext,
    external_customer_id: &str,
) -> Result<UsageEventReceipt, ApiError> {
    let (model, prompt_tokens, completion_tokens) = {
        let mut rng = rand::thread_rng();
        let model = DEMO_MODELS.choose(&mut rng).copied().unwrap_or(DEMO_MODELS[0]);
        (model, rng.gen_range(50..=500), rng.gen_range(20..=300))
    };
    fire_usage_event_with(context, external_customer_id, model, prompt_tokens, completion_tokens)
        .await
}

pub async fn fire_usage_event_with(
    context: &AppContext,
    external_customer_id: &str,
    model: &str,
    prompt_tokens: u64,
    completion_tokens: u64,
) -> Result<UsageEventReceipt, ApiError> {
    let started = Instant::now();
    let facade = context.facade();

    let result = context
        .guard
        .run(facade.fire_llm_usage_event(external_customer_id, model, prompt_tokens, completion_tokens))
        .await
        .map(|()| UsageEventReceipt {
            external_customer_id: external_customer_id.to_string(),
            model: model.to_string(),
            prompt_tokens,
            completion_tokens,
        });

    log_command_execution("dashboard::fire_usage_event", started.elapsed(), result.as_ref().err());
    result
}

/// Cursor over the customer's events of the last seven days, ten per page.
pub fn recent_events_cursor(external_customer_id: &str, now: DateTime<Utc>) -> EventCursor {
    EventCursor::new(GetEventsRequest {
        external_customer_id: Some(external_customer_id.to_string()),
        start_time: Some(iso(now - Duration::days(LOOKBACK_DAYS))),
        end_time: Some(iso(now)),
        page_size: Some(DEFAULT_EVENTS_PAGE_SIZE),
        ..GetEventsRequest::default()
    })
}

/// Next page from `cursor`, or `None` once the history is exhausted.
pub async fn recent_events(
    context: &AppContext,
    cursor: &mut EventCursor,
) -> Result<Option<GetEventsResponse>, ApiError> {
    let started = Instant::now();
    let facade = context.facade();

    let result = context.guard.run(cursor.next_page(&facade)).await;

    log_command_execution("dashboard::recent_events", started.elapsed(), result.as_ref().err());
    result
}

/// Daily `llm_usage` token sums over the last seven days.
pub async fn usage_summary(
    context: &AppContext,
    external_customer_id: &str,
    now: DateTime<Utc>,
) -> Result<GetUsageResponse, ApiError> {
    let started = Instant::now();
    let request = GetUsageRequest {
        external_customer_id: Some(external_customer_id.to_string()),
        start_time: Some(iso(now - Duration::days(LOOKBACK_DAYS))),
        end_time: Some(iso(now)),
        property_name: Some("tokens".to_string()),
        window_size: Some(WindowSize::Day),
        ..GetUsageRequest::new(AggregationType::Sum, LLM_USAGE_EVENT)
    };
    let facade = context.facade();

    let result = context.guard.run(facade.get_usage(&request)).await;

    log_command_execution("dashboard::usage_summary", started.elapsed(), result.as_ref().err());
    result
}

pub async fn customer_usage(
    context: &AppContext,
    customer_id: &str,
) -> Result<CustomerUsageSummaryResponse, ApiError> {
    let started = Instant::now();
    let facade = context.facade();

    let result = context
        .guard
        .run(facade.get_customer_usage(customer_id, &CustomerUsageParams::default()))
        .await;

    log_command_execution("dashboard::customer_usage", started.elapsed(), result.as_ref().err());
    result
}

/// Local status; nothing is sent to the backend.
pub async fn status(context: &AppContext) -> DashboardStatus {
    let health = context.health_check().await;
    let sdk = context.flexprice.config();

    DashboardStatus {
        authenticated: context.session.is_authenticated().await.unwrap_or(false),
        sdk_configured: sdk.is_configured(),
        api_base_url: context.api.base_url().to_string(),
        sdk_base_path: sdk.base_path,
        login_path: context.session.login_path().to_string(),
        health,
    }
}

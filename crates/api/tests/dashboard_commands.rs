//! Analytics page commands against a mock backend.

mod support;

use chrono::{TimeZone, Utc};
use flexprice_core::CredentialStore;
use flexprice_infra::ApiErrorCategory;
use flexprice_lib::commands;
use serde_json::json;
use support::{TestContext, TEST_API_KEY};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fire_usage_event_reports_what_was_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_json(json!({
            "event_name": "llm_usage",
            "external_customer_id": "demo_user_123",
            "source": "dashboard",
            "properties": {
                "model": "claude-3-sonnet",
                "prompt_tokens": 120,
                "completion_tokens": 80,
                "tokens": 200
            }
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"event_id": "evt_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, Some("tok_1"));
    let receipt =
        commands::fire_usage_event_with(&ctx.context, "demo_user_123", "claude-3-sonnet", 120, 80)
            .await
            .unwrap();

    assert_eq!(receipt.model, "claude-3-sonnet");
    assert_eq!(receipt.prompt_tokens + receipt.completion_tokens, 200);
}

#[tokio::test]
async fn random_usage_event_stays_in_demo_ranges() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, Some("tok_1"));
    let receipt = commands::fire_usage_event(&ctx.context, "demo_user_123").await.unwrap();

    assert!((50..=500).contains(&receipt.prompt_tokens));
    assert!((20..=300).contains(&receipt.completion_tokens));
}

#[tokio::test]
async fn recent_events_pages_over_last_week() {
    let server = MockServer::start().await;
    let now = Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap();
    Mock::given(method("POST"))
        .and(path("/events/query"))
        .and(body_json(json!({
            "external_customer_id": "demo_user_123",
            "start_time": "2024-01-01T12:00:00.000Z",
            "end_time": "2024-01-08T12:00:00.000Z",
            "page_size": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{"id": "evt_2"}, {"id": "evt_1"}],
            "has_more": true,
            "iter_last_key": "key_1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/events/query"))
        .and(body_json(json!({
            "external_customer_id": "demo_user_123",
            "start_time": "2024-01-01T12:00:00.000Z",
            "end_time": "2024-01-08T12:00:00.000Z",
            "page_size": 10,
            "iter_last_key": "key_1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{"id": "evt_0"}],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, Some("tok_1"));
    let mut cursor = commands::recent_events_cursor("demo_user_123", now);

    let first = commands::recent_events(&ctx.context, &mut cursor).await.unwrap().unwrap();
    assert_eq!(first.events.len(), 2);

    let second = commands::recent_events(&ctx.context, &mut cursor).await.unwrap().unwrap();
    assert_eq!(second.events[0].id, "evt_0");

    assert!(commands::recent_events(&ctx.context, &mut cursor).await.unwrap().is_none());
}

#[tokio::test]
async fn usage_summary_requests_daily_token_sums() {
    let server = MockServer::start().await;
    let now = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
    Mock::given(method("POST"))
        .and(path("/events/usage"))
        .and(body_json(json!({
            "aggregation_type": "SUM",
            "event_name": "llm_usage",
            "external_customer_id": "demo_user_123",
            "property_name": "tokens",
            "start_time": "2024-01-01T00:00:00.000Z",
            "end_time": "2024-01-08T00:00:00.000Z",
            "window_size": "DAY"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "event_name": "llm_usage",
            "results": [
                {"window_size": "2024-01-06T00:00:00Z", "value": 300.0},
                {"window_size": "2024-01-07T00:00:00Z", "value": 450.0}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, Some("tok_1"));
    let usage = commands::usage_summary(&ctx.context, "demo_user_123", now).await.unwrap();

    assert_eq!(usage.results.len(), 2);
    assert_eq!(usage.total(), 750.0);
}

#[tokio::test]
async fn rejected_api_key_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/cus_1/usage"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "invalid api key"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, Some("tok_1"));
    let err = commands::customer_usage(&ctx.context, "cus_1").await.unwrap_err();

    assert_eq!(err.category(), ApiErrorCategory::Unauthenticated);
    assert_eq!(err.message(), "invalid api key");
    assert_eq!(ctx.navigator.visited(), vec!["/login".to_string()]);
    // The dashboard bearer token is owned by the bearer transport, not the facade
    assert_eq!(ctx.credentials.token().await.unwrap().as_deref(), Some("tok_1"));
}

#[tokio::test]
async fn server_error_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/cus_1/usage"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, Some("tok_1"));
    let err = commands::customer_usage(&ctx.context, "cus_1").await.unwrap_err();

    assert_eq!(err.category(), ApiErrorCategory::Server);
    assert_eq!(ctx.credentials.token().await.unwrap().as_deref(), Some("tok_1"));
    assert!(ctx.navigator.visited().is_empty());
}

#[tokio::test]
async fn status_reports_local_state_without_network() {
    let server = MockServer::start().await;
    let ctx = TestContext::against(&server, Some("tok_1"));

    let status = commands::status(&ctx.context).await;

    assert!(status.authenticated);
    assert!(status.sdk_configured);
    assert_eq!(status.sdk_base_path, server.uri());
    assert_eq!(status.login_path, "/login");
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

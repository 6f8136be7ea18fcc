//! Integration tests for AppContext lifecycle
//!
//! Covers wiring from explicit parts, runtime reconfiguration of the facade
//! and the local readiness report.

mod support;

use flexprice_core::CredentialStore;
use flexprice_domain::SdkConfig;
use flexprice_lib::commands;
use serde_json::json;
use support::{TestContext, TEST_API_KEY};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn from_parts_wires_both_transports() {
    let server = MockServer::start().await;
    let ctx = TestContext::against(&server, Some("tok_1"));

    assert_eq!(ctx.context.api.base_url(), server.uri());
    assert!(ctx.context.flexprice.is_configured());
    assert_eq!(ctx.context.facade().config().api_key, TEST_API_KEY);
}

#[tokio::test]
async fn health_check_reports_signed_in_and_configured() {
    let server = MockServer::start().await;
    let ctx = TestContext::against(&server, Some("tok_1"));

    let health = ctx.context.health_check().await;

    assert!(health.is_healthy);
    assert_eq!(health.components.len(), 2);
    assert!(health.message.is_none());
}

#[tokio::test]
async fn health_check_names_missing_session() {
    let server = MockServer::start().await;
    let ctx = TestContext::against(&server, None);

    let health = ctx.context.health_check().await;

    assert!(!health.is_healthy);
    assert_eq!(health.message.as_deref(), Some("credential_store: not signed in"));
}

#[tokio::test]
async fn health_check_flags_unconfigured_sdk() {
    let server = MockServer::start().await;
    let ctx = TestContext::with_sdk(&server, Some("tok_1"), SdkConfig::default());

    let health = ctx.context.health_check().await;

    assert!(!health.is_healthy);
    let sdk = health.components.iter().find(|c| c.name == "sdk_config").unwrap();
    assert!(!sdk.is_healthy);
}

#[tokio::test]
async fn reconfigure_redirects_subsequent_calls() {
    let old_server = MockServer::start().await;
    let new_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .and(header("x-api-key", "sk_new"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"event_id": "evt_1"})))
        .expect(1)
        .mount(&new_server)
        .await;

    let ctx = TestContext::against(&old_server, Some("tok_1"));
    ctx.context.reconfigure(SdkConfig::new(new_server.uri(), "sk_new")).unwrap();

    commands::fire_usage_event_with(&ctx.context, "demo_user_123", "gpt-4", 10, 5).await.unwrap();

    assert!(old_server.received_requests().await.unwrap_or_default().is_empty());
    assert_eq!(ctx.context.facade().config().api_key, "sk_new");
}

#[tokio::test]
async fn reconfigure_keeps_previous_facade_on_invalid_config() {
    let server = MockServer::start().await;
    let ctx = TestContext::against(&server, Some("tok_1"));

    let rejected = SdkConfig::new(server.uri(), "sk").with_header("bad header", "value");
    assert!(ctx.context.reconfigure(rejected).is_err());

    assert_eq!(ctx.context.facade().config().api_key, TEST_API_KEY);
}

#[tokio::test]
async fn sign_in_and_out_round_trip_through_store() {
    let server = MockServer::start().await;
    let ctx = TestContext::against(&server, None);

    commands::sign_in_with_token(&ctx.context, "tok_pasted").await.unwrap();
    assert_eq!(ctx.credentials.token().await.unwrap().as_deref(), Some("tok_pasted"));

    commands::sign_out(&ctx.context).await.unwrap();
    assert!(ctx.credentials.token().await.unwrap().is_none());
}

//! Sign-in and sign-out commands against a mock backend.

mod support;

use flexprice_core::CredentialStore;
use flexprice_infra::ApiErrorCategory;
use flexprice_lib::commands;
use serde_json::json;
use support::{TestContext, TEST_API_KEY};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn password_sign_in_stores_issued_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_json(json!({"email": "ops@acme.test", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok_issued",
            "user_id": "usr_1",
            "tenant_id": "ten_1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, None);
    commands::sign_in_with_password(&ctx.context, "ops@acme.test", "hunter22").await.unwrap();

    assert_eq!(ctx.credentials.token().await.unwrap().as_deref(), Some("tok_issued"));
    assert!(ctx.navigator.visited().is_empty());
}

#[tokio::test]
async fn rejected_password_redirects_without_storing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "error": {"message": "invalid credentials"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, None);
    let err = commands::sign_in_with_password(&ctx.context, "ops@acme.test", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.category(), ApiErrorCategory::Unauthenticated);
    assert_eq!(err.message(), "invalid credentials");
    assert!(ctx.credentials.token().await.unwrap().is_none());
    assert_eq!(ctx.navigator.visited(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn empty_issued_token_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": null})))
        .mount(&server)
        .await;

    let ctx = TestContext::against(&server, None);
    let err = commands::sign_in_with_password(&ctx.context, "ops@acme.test", "hunter22")
        .await
        .unwrap_err();

    assert_eq!(err.category(), ApiErrorCategory::RequestSetup);
    assert!(ctx.credentials.token().await.unwrap().is_none());
}

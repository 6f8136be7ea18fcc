mod support;

use std::sync::Arc;

use flexprice_core::SessionService;
use flexprice_domain::{FlexPriceError, SessionConfig};
use support::{MockCredentialStore, RecordingNavigator};

fn service(
    store: MockCredentialStore,
) -> (SessionService, Arc<MockCredentialStore>, Arc<RecordingNavigator>) {
    let store = Arc::new(store);
    let navigator = Arc::new(RecordingNavigator::default());
    let service = SessionService::new(store.clone(), navigator.clone(), &SessionConfig::default());
    (service, store, navigator)
}

#[tokio::test]
async fn sign_in_stores_trimmed_token() {
    let (service, store, _) = service(MockCredentialStore::default());

    service.sign_in("  tok_123 ").await.unwrap();

    assert_eq!(store.current().as_deref(), Some("tok_123"));
    assert!(service.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn sign_in_rejects_empty_token() {
    let (service, store, _) = service(MockCredentialStore::default());

    let err = service.sign_in("   ").await.unwrap_err();

    assert!(matches!(err, FlexPriceError::InvalidInput(_)));
    assert!(store.current().is_none());
}

#[tokio::test]
async fn sign_out_clears_credential() {
    let (service, store, _) = service(MockCredentialStore::with_token("tok"));

    service.sign_out().await.unwrap();

    assert!(store.current().is_none());
    assert!(!service.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn empty_stored_token_is_not_authenticated() {
    let (service, _, _) = service(MockCredentialStore::with_token(""));
    assert!(!service.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn store_failures_propagate() {
    let (service, _, _) = service(MockCredentialStore::failing());

    assert!(matches!(service.is_authenticated().await, Err(FlexPriceError::Storage(_))));
    assert!(matches!(service.sign_out().await, Err(FlexPriceError::Storage(_))));
}

#[test]
fn redirect_navigates_to_configured_login_path() {
    let store = Arc::new(MockCredentialStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let config = SessionConfig { login_path: "/auth/sign-in".into(), ..SessionConfig::default() };
    let service = SessionService::new(store, navigator.clone(), &config);

    service.redirect_to_login();

    assert_eq!(service.login_path(), "/auth/sign-in");
    assert_eq!(navigator.visited(), vec!["/auth/sign-in".to_string()]);
}

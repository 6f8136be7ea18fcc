//! Resource-oriented facade over the FlexPrice backend
//!
//! One method per backend operation. Each forwards to its sub-client, logs a
//! failure and returns it unchanged. Nothing is retried, cached or batched.

use std::sync::Arc;
use std::time::Duration;

use flexprice_domain::constants::{API_KEY_HEADER, LLM_USAGE_EVENT};
use flexprice_domain::{
    AuthResponse, BulkIngestEventRequest, CancelSubscriptionRequest, CreateCustomerRequest,
    CreateFeatureRequest, CreateInvoiceRequest, CreatePlanRequest, CreateSubscriptionRequest,
    CustomerEntitlementsResponse, CustomerResponse, CustomerUsageParams,
    CustomerUsageSummaryResponse, FeatureResponse, GetEventsRequest, GetEventsResponse,
    GetUsageAnalyticsRequest, GetUsageAnalyticsResponse, GetUsageRequest, GetUsageResponse,
    IngestEventRequest, InvoiceResponse, ListCustomersParams, ListCustomersResponse,
    ListFeaturesParams, ListFeaturesResponse, ListInvoicesParams, ListInvoicesResponse,
    ListPlansParams, ListPlansResponse, ListSubscriptionsParams, ListSubscriptionsResponse,
    LoginRequest, PauseSubscriptionRequest, PlanResponse, ResumeSubscriptionRequest, SdkConfig,
    SignUpRequest, SubscriptionResponse, UpdateCustomerRequest, UpdateFeatureRequest,
    UpdateInvoiceRequest, UpdatePlanRequest,
};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::{
    AddonsApi, AuthApi, CouponsApi, CreditNotesApi, CustomersApi, EntitlementsApi, EventsApi,
    FeaturesApi, InvoicesApi, PlansApi, SubscriptionsApi,
};
use crate::api::{ApiClient, ApiError, ApiKeyAuth, FailureLogger};

/// Source tag for events emitted from the dashboard
pub const DASHBOARD_EVENT_SOURCE: &str = "dashboard";

/// FlexPrice facade
///
/// All sub-clients share one [`ApiClient`] bound to the [`SdkConfig`] the
/// facade was built with. The facade is immutable; reconfiguration builds a
/// new one (see [`FlexPriceHandle`](super::FlexPriceHandle)).
pub struct FlexPrice {
    config: SdkConfig,
    events: EventsApi,
    customers: CustomersApi,
    auth: AuthApi,
    plans: PlansApi,
    features: FeaturesApi,
    invoices: InvoicesApi,
    subscriptions: SubscriptionsApi,
    addons: AddonsApi,
    coupons: CouponsApi,
    credit_notes: CreditNotesApi,
    entitlements: EntitlementsApi,
}

impl FlexPrice {
    /// Build the shared client and every sub-client.
    ///
    /// An unconfigured [`SdkConfig`] is accepted with a warning whichever half
    /// is missing. Without an API key the backend rejects calls; without a
    /// base path every call fails locally with [`ApiError::RequestSetup`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestSetup`] if a static header is not a valid
    /// HTTP header.
    pub fn new(config: SdkConfig) -> Result<Self, ApiError> {
        if !config.is_configured() {
            warn!(base_path = %config.base_path, "FlexPrice API key or base path missing");
        }

        let mut builder = ApiClient::builder()
            .base_url(config.base_path.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .request_interceptor(Arc::new(ApiKeyAuth::new(config.api_key.as_str())))
            .response_interceptor(Arc::new(FailureLogger));
        for (name, value) in &config.headers {
            if name.eq_ignore_ascii_case(API_KEY_HEADER) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        let client = Arc::new(builder.build()?);

        info!(base_path = %client.base_url(), "FlexPrice facade initialized");

        Ok(Self {
            events: EventsApi::new(client.clone()),
            customers: CustomersApi::new(client.clone()),
            auth: AuthApi::new(client.clone()),
            plans: PlansApi::new(client.clone()),
            features: FeaturesApi::new(client.clone()),
            invoices: InvoicesApi::new(client.clone()),
            subscriptions: SubscriptionsApi::new(client.clone()),
            addons: AddonsApi::new(client.clone()),
            coupons: CouponsApi::new(client.clone()),
            credit_notes: CreditNotesApi::new(client.clone()),
            entitlements: EntitlementsApi::new(client),
            config,
        })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Local readiness check only; the backend is not contacted.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    // === Sub-clients ===

    pub fn events(&self) -> &EventsApi {
        &self.events
    }

    pub fn customers(&self) -> &CustomersApi {
        &self.customers
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn plans(&self) -> &PlansApi {
        &self.plans
    }

    pub fn features(&self) -> &FeaturesApi {
        &self.features
    }

    pub fn invoices(&self) -> &InvoicesApi {
        &self.invoices
    }

    pub fn subscriptions(&self) -> &SubscriptionsApi {
        &self.subscriptions
    }

    pub fn addons(&self) -> &AddonsApi {
        &self.addons
    }

    pub fn coupons(&self) -> &CouponsApi {
        &self.coupons
    }

    pub fn credit_notes(&self) -> &CreditNotesApi {
        &self.credit_notes
    }

    pub fn entitlements(&self) -> &EntitlementsApi {
        &self.entitlements
    }

    // === Events ===

    pub async fn ingest_event(&self, event: &IngestEventRequest) -> Result<(), ApiError> {
        self.events.ingest(event).await.inspect_err(|e| error!(error = %e, "Failed to ingest event"))
    }

    pub async fn ingest_bulk_events(&self, request: &BulkIngestEventRequest) -> Result<(), ApiError> {
        self.events
            .ingest_bulk(request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to ingest bulk events"))
    }

    pub async fn query_events(&self, request: &GetEventsRequest) -> Result<GetEventsResponse, ApiError> {
        self.events.query(request).await.inspect_err(|e| error!(error = %e, "Failed to query events"))
    }

    pub async fn get_usage_analytics(
        &self,
        request: &GetUsageAnalyticsRequest,
    ) -> Result<GetUsageAnalyticsResponse, ApiError> {
        self.events
            .usage_analytics(request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to get usage analytics"))
    }

    pub async fn get_usage(&self, request: &GetUsageRequest) -> Result<GetUsageResponse, ApiError> {
        self.events.usage(request).await.inspect_err(|e| error!(error = %e, "Failed to get usage"))
    }

    /// Ingest an event built from a name, customer and free-form properties.
    pub async fn fire_event(
        &self,
        event_name: &str,
        external_customer_id: &str,
        properties: Map<String, Value>,
    ) -> Result<(), ApiError> {
        let mut event = IngestEventRequest::new(event_name, external_customer_id);
        event.properties = properties;
        self.ingest_event(&event).await
    }

    /// Ingest one `llm_usage` event tagged with the dashboard source.
    pub async fn fire_llm_usage_event(
        &self,
        external_customer_id: &str,
        model: &str,
        prompt_tokens: u64,
        completion_tokens: u64,
    ) -> Result<(), ApiError> {
        let event = IngestEventRequest::new(LLM_USAGE_EVENT, external_customer_id)
            .with_source(DASHBOARD_EVENT_SOURCE)
            .with_property("model", model)
            .with_property("prompt_tokens", prompt_tokens)
            .with_property("completion_tokens", completion_tokens)
            .with_property("tokens", prompt_tokens + completion_tokens);
        self.ingest_event(&event).await
    }

    // === Customers ===

    pub async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ApiError> {
        self.customers
            .create(request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create customer"))
    }

    pub async fn get_customer(&self, id: &str) -> Result<CustomerResponse, ApiError> {
        self.customers.get(id).await.inspect_err(|e| error!(error = %e, "Failed to get customer"))
    }

    pub async fn update_customer(
        &self,
        id: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<CustomerResponse, ApiError> {
        self.customers
            .update(id, request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update customer"))
    }

    pub async fn delete_customer(&self, id: &str) -> Result<(), ApiError> {
        self.customers.delete(id).await.inspect_err(|e| error!(error = %e, "Failed to delete customer"))
    }

    pub async fn list_customers(
        &self,
        params: &ListCustomersParams,
    ) -> Result<ListCustomersResponse, ApiError> {
        self.customers.list(params).await.inspect_err(|e| error!(error = %e, "Failed to list customers"))
    }

    pub async fn get_customer_usage(
        &self,
        id: &str,
        params: &CustomerUsageParams,
    ) -> Result<CustomerUsageSummaryResponse, ApiError> {
        self.customers
            .usage(id, params)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to get customer usage"))
    }

    pub async fn get_customer_entitlements(
        &self,
        id: &str,
        params: &CustomerUsageParams,
    ) -> Result<CustomerEntitlementsResponse, ApiError> {
        self.customers
            .entitlements(id, params)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to get customer entitlements"))
    }

    // === Auth ===

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.auth.login(request).await.inspect_err(|e| error!(error = %e, "Failed to login"))
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        self.auth.sign_up(request).await.inspect_err(|e| error!(error = %e, "Failed to sign up"))
    }

    // === Plans ===

    pub async fn create_plan(&self, request: &CreatePlanRequest) -> Result<PlanResponse, ApiError> {
        self.plans.create(request).await.inspect_err(|e| error!(error = %e, "Failed to create plan"))
    }

    pub async fn get_plan(&self, id: &str) -> Result<PlanResponse, ApiError> {
        self.plans.get(id).await.inspect_err(|e| error!(error = %e, "Failed to get plan"))
    }

    pub async fn update_plan(
        &self,
        id: &str,
        request: &UpdatePlanRequest,
    ) -> Result<PlanResponse, ApiError> {
        self.plans.update(id, request).await.inspect_err(|e| error!(error = %e, "Failed to update plan"))
    }

    pub async fn delete_plan(&self, id: &str) -> Result<(), ApiError> {
        self.plans.delete(id).await.inspect_err(|e| error!(error = %e, "Failed to delete plan"))
    }

    pub async fn list_plans(&self, params: &ListPlansParams) -> Result<ListPlansResponse, ApiError> {
        self.plans.list(params).await.inspect_err(|e| error!(error = %e, "Failed to list plans"))
    }

    // === Features ===

    pub async fn create_feature(
        &self,
        request: &CreateFeatureRequest,
    ) -> Result<FeatureResponse, ApiError> {
        self.features
            .create(request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create feature"))
    }

    pub async fn get_feature(&self, id: &str) -> Result<FeatureResponse, ApiError> {
        self.features.get(id).await.inspect_err(|e| error!(error = %e, "Failed to get feature"))
    }

    pub async fn update_feature(
        &self,
        id: &str,
        request: &UpdateFeatureRequest,
    ) -> Result<FeatureResponse, ApiError> {
        self.features
            .update(id, request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update feature"))
    }

    pub async fn delete_feature(&self, id: &str) -> Result<(), ApiError> {
        self.features.delete(id).await.inspect_err(|e| error!(error = %e, "Failed to delete feature"))
    }

    pub async fn list_features(
        &self,
        params: &ListFeaturesParams,
    ) -> Result<ListFeaturesResponse, ApiError> {
        self.features.list(params).await.inspect_err(|e| error!(error = %e, "Failed to list features"))
    }

    // === Invoices ===

    pub async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<InvoiceResponse, ApiError> {
        self.invoices
            .create(request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create invoice"))
    }

    pub async fn get_invoice(&self, id: &str) -> Result<InvoiceResponse, ApiError> {
        self.invoices.get(id).await.inspect_err(|e| error!(error = %e, "Failed to get invoice"))
    }

    pub async fn update_invoice(
        &self,
        id: &str,
        request: &UpdateInvoiceRequest,
    ) -> Result<InvoiceResponse, ApiError> {
        self.invoices
            .update(id, request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update invoice"))
    }

    /// Always fails: invoices cannot be deleted through the backend API.
    pub async fn delete_invoice(&self, id: &str) -> Result<(), ApiError> {
        let err = ApiError::Unsupported(
            "Delete invoice method not available in current API version".to_string(),
        );
        error!(invoice_id = %id, error = %err, "Failed to delete invoice");
        Err(err)
    }

    pub async fn list_invoices(
        &self,
        params: &ListInvoicesParams,
    ) -> Result<ListInvoicesResponse, ApiError> {
        self.invoices.list(params).await.inspect_err(|e| error!(error = %e, "Failed to list invoices"))
    }

    // === Subscriptions ===

    pub async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.subscriptions
            .create(request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create subscription"))
    }

    pub async fn get_subscription(&self, id: &str) -> Result<SubscriptionResponse, ApiError> {
        self.subscriptions
            .get(id)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to get subscription"))
    }

    /// Cancel immediately. A missing or blank reason becomes
    /// `"User requested cancellation"`.
    pub async fn cancel_subscription(
        &self,
        id: &str,
        reason: Option<&str>,
    ) -> Result<SubscriptionResponse, ApiError> {
        let request = CancelSubscriptionRequest::immediate(reason);
        self.subscriptions
            .cancel(id, &request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to cancel subscription"))
    }

    /// Pause immediately. A missing or blank reason becomes
    /// `"User requested pause"`.
    pub async fn pause_subscription(
        &self,
        id: &str,
        reason: Option<&str>,
    ) -> Result<SubscriptionResponse, ApiError> {
        let request = PauseSubscriptionRequest::immediate(reason);
        self.subscriptions
            .pause(id, &request)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to pause subscription"))
    }

    pub async fn resume_subscription(&self, id: &str) -> Result<SubscriptionResponse, ApiError> {
        self.subscriptions
            .resume(id, &ResumeSubscriptionRequest::immediate())
            .await
            .inspect_err(|e| error!(error = %e, "Failed to resume subscription"))
    }

    pub async fn list_subscriptions(
        &self,
        params: &ListSubscriptionsParams,
    ) -> Result<ListSubscriptionsResponse, ApiError> {
        self.subscriptions
            .list(params)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list subscriptions"))
    }
}

impl std::fmt::Debug for FlexPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexPrice").field("config", &self.config).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_api_key() {
        let facade = FlexPrice::new(SdkConfig::new("https://api.example.com/v1", "")).unwrap();
        assert!(!facade.is_configured());
        assert_eq!(facade.config().base_path, "https://api.example.com/v1");
    }

    #[tokio::test]
    async fn builds_without_base_path() {
        let facade = FlexPrice::new(SdkConfig::new("   ", "sk")).unwrap();
        assert!(!facade.is_configured());

        let err = facade.get_customer("cus_1").await.unwrap_err();
        assert!(matches!(err, ApiError::RequestSetup(_)));
        assert_eq!(err.message(), "Base URL not set");
    }

    #[tokio::test]
    async fn delete_invoice_is_unsupported() {
        let facade = FlexPrice::new(SdkConfig::new("http://127.0.0.1:9", "sk")).unwrap();
        let err = facade.delete_invoice("inv_1").await.unwrap_err();
        assert!(matches!(err, ApiError::Unsupported(_)));
        assert_eq!(err.to_string(), "Delete invoice method not available in current API version");
    }

    #[test]
    fn debug_hides_api_key() {
        let facade = FlexPrice::new(SdkConfig::new("https://api.example.com/v1", "sk_hidden")).unwrap();
        assert!(!format!("{facade:?}").contains("sk_hidden"));
    }
}

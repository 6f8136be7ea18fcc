//! Customer records, usage summaries and entitlements

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, push_all, push_opt, ListParams, ListResponse, QueryPairs, ToQuery};
use super::entitlements::AggregatedEntitlement;
use super::features::FeatureResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub external_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    /// ISO 3166-1 alpha-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl CreateCustomerRequest {
    pub fn new(external_id: impl Into<String>) -> Self {
        Self { external_id: external_id.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tenant_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListCustomersResponse = ListResponse<CustomerResponse>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCustomersParams {
    pub customer_ids: Vec<String>,
    pub email: Option<String>,
    pub external_id: Option<String>,
    pub external_ids: Vec<String>,
    pub list: ListParams,
}

impl ToQuery for ListCustomersParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_all(&mut pairs, "customer_ids", &self.customer_ids);
        push_opt(&mut pairs, "email", self.email.as_ref());
        push_opt(&mut pairs, "external_id", self.external_id.as_ref());
        push_all(&mut pairs, "external_ids", &self.external_ids);
        pairs.extend(self.list.to_query());
        pairs
    }
}

/// Narrows customer usage and entitlement lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUsageParams {
    pub feature_ids: Vec<String>,
    pub subscription_ids: Vec<String>,
}

impl ToQuery for CustomerUsageParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_all(&mut pairs, "feature_ids", &self.feature_ids);
        push_all(&mut pairs, "subscription_ids", &self.subscription_ids);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureUsageSummary {
    pub feature: Option<FeatureResponse>,
    pub total_limit: Option<i64>,
    pub current_usage: f64,
    pub usage_percent: f64,
    pub is_enabled: bool,
    pub is_soft_limit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerUsageSummaryResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<FeatureUsageSummary>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

impl CustomerUsageSummaryResponse {
    pub fn total_usage(&self) -> f64 {
        self.features.iter().map(|f| f.current_usage).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFeatureEntitlement {
    pub feature: Option<FeatureResponse>,
    pub entitlement: Option<AggregatedEntitlement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerEntitlementsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<CustomerFeatureEntitlement>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn list_params_repeat_array_keys() {
        let params = ListCustomersParams {
            customer_ids: vec!["c1".into(), "c2".into()],
            email: Some("a@b.co".into()),
            list: ListParams { limit: Some(5), ..ListParams::default() },
            ..ListCustomersParams::default()
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("customer_ids", "c1".to_string()),
                ("customer_ids", "c2".to_string()),
                ("email", "a@b.co".to_string()),
                ("limit", "5".to_string()),
            ]
        );
    }

    #[test]
    fn usage_summary_totals_features() {
        let parsed: CustomerUsageSummaryResponse = serde_json::from_value(json!({
            "customer_id": "cust_1",
            "features": [
                {"current_usage": 10.0, "is_enabled": true},
                {"current_usage": 2.5, "feature": {"id": "feat_1", "name": "Tokens"}}
            ]
        }))
        .unwrap();
        assert!((parsed.total_usage() - 12.5).abs() < f64::EPSILON);
        assert_eq!(parsed.features[1].feature.as_ref().map(|f| f.id.as_str()), Some("feat_1"));
    }

    #[test]
    fn create_request_serializes_required_only() {
        let json = serde_json::to_value(CreateCustomerRequest::new("ext_1")).unwrap();
        assert_eq!(json, json!({"external_id": "ext_1"}));
    }
}

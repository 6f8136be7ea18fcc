//! Plan entitlements

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, push_all, ListParams, ListResponse, QueryPairs, ToQuery};
use super::features::{FeatureResponse, FeatureType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEntitlementRequest {
    pub plan_id: String,
    pub feature_id: String,
    pub feature_type: FeatureType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    /// Absent means unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_reset_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_soft_limit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitlementResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plan_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_type: String,
    pub is_enabled: bool,
    pub usage_limit: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub usage_reset_period: String,
    pub is_soft_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub static_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub feature: Option<FeatureResponse>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Entitlement merged across every subscription of a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatedEntitlement {
    pub is_enabled: bool,
    pub usage_limit: Option<i64>,
    pub is_soft_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub usage_reset_period: String,
    #[serde(deserialize_with = "null_as_default")]
    pub static_values: Vec<String>,
}

pub type ListEntitlementsResponse = ListResponse<EntitlementResponse>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntitlementsParams {
    pub plan_ids: Vec<String>,
    pub feature_ids: Vec<String>,
    pub list: ListParams,
}

impl ToQuery for ListEntitlementsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_all(&mut pairs, "plan_ids", &self.plan_ids);
        push_all(&mut pairs, "feature_ids", &self.feature_ids);
        pairs.extend(self.list.to_query());
        pairs
    }
}

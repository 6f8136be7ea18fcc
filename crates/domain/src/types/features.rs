//! Billable features and their meters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ListParams, ListResponse};
use super::events::AggregationType;
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Metered,
    Boolean,
    Static,
}

impl_domain_status_conversions!(FeatureType {
    Metered => "metered",
    Boolean => "boolean",
    Static => "static",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterAggregation {
    #[serde(rename = "type")]
    pub aggregation_type: AggregationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Meter created together with a metered feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMeterRequest {
    pub event_name: String,
    pub aggregation: MeterAggregation,
    /// `BILLING_PERIOD` or `NEVER`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_usage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFeatureRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<CreateMeterRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_singular: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_plural: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl CreateFeatureRequest {
    pub fn new(name: impl Into<String>, feature_type: FeatureType) -> Self {
        Self {
            name: name.into(),
            feature_type,
            lookup_key: None,
            description: None,
            meter: None,
            unit_singular: None,
            unit_plural: None,
            metadata: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFeatureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_singular: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lookup_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub feature_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meter_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_singular: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_plural: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListFeaturesResponse = ListResponse<FeatureResponse>;
pub type ListFeaturesParams = ListParams;

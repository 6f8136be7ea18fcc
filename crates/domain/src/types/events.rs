//! Event ingestion, querying and usage aggregation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::null_as_default;
use crate::impl_domain_status_conversions;

/// Aggregation applied by usage queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationType {
    #[serde(rename = "COUNT")]
    Count,
    #[serde(rename = "SUM")]
    Sum,
    #[serde(rename = "AVG")]
    Avg,
    #[serde(rename = "MAX")]
    Max,
    #[serde(rename = "LATEST")]
    Latest,
    #[serde(rename = "COUNT_UNIQUE")]
    CountUnique,
    #[serde(rename = "SUM_WITH_MULTIPLIER")]
    SumWithMultiplier,
}

impl_domain_status_conversions!(AggregationType {
    Count => "COUNT",
    Sum => "SUM",
    Avg => "AVG",
    Max => "MAX",
    Latest => "LATEST",
    CountUnique => "COUNT_UNIQUE",
    SumWithMultiplier => "SUM_WITH_MULTIPLIER",
});

/// Bucket width for windowed usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSize {
    #[serde(rename = "MINUTE")]
    Minute,
    #[serde(rename = "15MIN")]
    FifteenMinutes,
    #[serde(rename = "30MIN")]
    ThirtyMinutes,
    #[serde(rename = "HOUR")]
    Hour,
    #[serde(rename = "3HOUR")]
    ThreeHours,
    #[serde(rename = "6HOUR")]
    SixHours,
    #[serde(rename = "12HOUR")]
    TwelveHours,
    #[serde(rename = "DAY")]
    Day,
    #[serde(rename = "WEEK")]
    Week,
    #[serde(rename = "MONTH")]
    Month,
}

impl_domain_status_conversions!(WindowSize {
    Minute => "MINUTE",
    FifteenMinutes => "15MIN",
    ThirtyMinutes => "30MIN",
    Hour => "HOUR",
    ThreeHours => "3HOUR",
    SixHours => "6HOUR",
    TwelveHours => "12HOUR",
    Day => "DAY",
    Week => "WEEK",
    Month => "MONTH",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestEventRequest {
    pub event_name: String,
    pub external_customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// RFC 3339; the backend stamps receipt time when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl IngestEventRequest {
    pub fn new(event_name: impl Into<String>, external_customer_id: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            external_customer_id: external_customer_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkIngestEventRequest {
    pub events: Vec<IngestEventRequest>,
}

/// Cursor-paged event query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEventsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iter_first_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iter_last_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_total: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetEventsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    pub has_more: bool,
    pub iter_first_key: Option<String>,
    pub iter_last_key: Option<String>,
    pub total_count: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUsageRequest {
    pub aggregation_type: AggregationType,
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Property summed or averaged; unused for COUNT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<WindowSize>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, Vec<String>>,
}

impl GetUsageRequest {
    pub fn new(aggregation_type: AggregationType, event_name: impl Into<String>) -> Self {
        Self {
            aggregation_type,
            event_name: event_name.into(),
            external_customer_id: None,
            customer_id: None,
            property_name: None,
            start_time: None,
            end_time: None,
            window_size: None,
            filters: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageResult {
    #[serde(deserialize_with = "null_as_default")]
    pub window_size: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUsageResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<UsageResult>,
    pub value: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_name: String,
    #[serde(rename = "type")]
    pub aggregation_type: Option<AggregationType>,
}

impl GetUsageResponse {
    /// Sum across all buckets, or the scalar value when no buckets came back.
    pub fn total(&self) -> f64 {
        if self.results.is_empty() {
            self.value.unwrap_or_default()
        } else {
            self.results.iter().map(|r| r.value).sum()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUsageAnalyticsRequest {
    pub external_customer_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<WindowSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAnalyticPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    pub usage: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAnalyticItem {
    #[serde(deserialize_with = "null_as_default")]
    pub feature_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_plural: String,
    pub total_usage: f64,
    pub total_cost: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub points: Vec<UsageAnalyticPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUsageAnalyticsResponse {
    pub total_cost: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<UsageAnalyticItem>,
}

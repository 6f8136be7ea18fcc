//! Subscriptions and their lifecycle requests

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, push_opt, ListParams, ListResponse, QueryPairs, ToQuery};
use crate::constants::{DEFAULT_CANCEL_REASON, DEFAULT_PAUSE_REASON};
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationType {
    Immediate,
    EndOfPeriod,
}

impl_domain_status_conversions!(CancellationType {
    Immediate => "immediate",
    EndOfPeriod => "end_of_period",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseMode {
    Immediate,
    Scheduled,
    PeriodEnd,
}

impl_domain_status_conversions!(PauseMode {
    Immediate => "immediate",
    Scheduled => "scheduled",
    PeriodEnd => "period_end",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeMode {
    Immediate,
    Scheduled,
    Auto,
}

impl_domain_status_conversions!(ResumeMode {
    Immediate => "immediate",
    Scheduled => "scheduled",
    Auto => "auto",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
    Incomplete,
    Trialing,
}

impl_domain_status_conversions!(SubscriptionStatus {
    Active => "active",
    Paused => "paused",
    Cancelled => "cancelled",
    Incomplete => "incomplete",
    Trialing => "trialing",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub customer_id: String,
    pub plan_id: String,
    pub currency: String,
    /// `RECURRING` or `ONETIME`
    pub billing_cadence: String,
    /// `MONTHLY`, `ANNUAL`, ...
    pub billing_period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plan_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subscription_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pause_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub billing_cadence: String,
    #[serde(deserialize_with = "null_as_default")]
    pub billing_period: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current_period_start: Option<String>,
    pub current_period_end: Option<String>,
    pub cancel_at_period_end: bool,
    pub cancelled_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListSubscriptionsResponse = ListResponse<SubscriptionResponse>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionsParams {
    pub customer_id: Option<String>,
    pub plan_id: Option<String>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub list: ListParams,
}

impl ToQuery for ListSubscriptionsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "customer_id", self.customer_id.as_ref());
        push_opt(&mut pairs, "plan_id", self.plan_id.as_ref());
        push_opt(&mut pairs, "subscription_status", self.subscription_status.as_ref());
        pairs.extend(self.list.to_query());
        pairs
    }
}

/// Blank reasons count as absent.
fn reason_or(reason: Option<&str>, default: &str) -> String {
    reason.map(str::trim).filter(|r| !r.is_empty()).unwrap_or(default).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSubscriptionRequest {
    pub cancellation_type: CancellationType,
    pub reason: String,
}

impl CancelSubscriptionRequest {
    /// Immediate cancellation with the caller's reason or the default one.
    pub fn immediate(reason: Option<&str>) -> Self {
        Self {
            cancellation_type: CancellationType::Immediate,
            reason: reason_or(reason, DEFAULT_CANCEL_REASON),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseSubscriptionRequest {
    pub pause_mode: PauseMode,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_days: Option<u32>,
}

impl PauseSubscriptionRequest {
    pub fn immediate(reason: Option<&str>) -> Self {
        Self {
            pause_mode: PauseMode::Immediate,
            reason: reason_or(reason, DEFAULT_PAUSE_REASON),
            pause_days: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSubscriptionRequest {
    pub resume_mode: ResumeMode,
}

impl ResumeSubscriptionRequest {
    pub const fn immediate() -> Self {
        Self { resume_mode: ResumeMode::Immediate }
    }
}

//! Discount coupons

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ListParams, ListResponse};
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponType {
    Fixed,
    Percentage,
}

impl_domain_status_conversions!(CouponType {
    Fixed => "fixed",
    Percentage => "percentage",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponCadence {
    Once,
    Repeated,
    Forever,
}

impl_domain_status_conversions!(CouponCadence {
    Once => "once",
    Repeated => "repeated",
    Forever => "forever",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCouponRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub coupon_type: CouponType,
    pub cadence: CouponCadence,
    /// Decimal string, required for fixed coupons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<String>,
    /// Decimal string, required for percentage coupons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_off: Option<String>,
    /// Only meaningful with the repeated cadence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_periods: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeem_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeem_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub coupon_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cadence: String,
    pub amount_off: Option<String>,
    pub percentage_off: Option<String>,
    pub duration_in_periods: Option<u32>,
    pub max_redemptions: Option<u32>,
    pub total_redemptions: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListCouponsResponse = ListResponse<CouponResponse>;
pub type ListCouponsParams = ListParams;

//! Add-ons attachable to subscriptions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ListParams, ListResponse};
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonType {
    Onetime,
    MultipleInstance,
}

impl_domain_status_conversions!(AddonType {
    Onetime => "onetime",
    MultipleInstance => "multiple_instance",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddonRequest {
    pub name: String,
    pub lookup_key: String,
    #[serde(rename = "type")]
    pub addon_type: AddonType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lookup_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub addon_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListAddonsResponse = ListResponse<AddonResponse>;
pub type ListAddonsParams = ListParams;

//! Invoices

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, push_opt, ListParams, ListResponse, QueryPairs, ToQuery};
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Draft,
    Finalized,
    Voided,
}

impl_domain_status_conversions!(InvoiceStatus {
    Draft => "DRAFT",
    Finalized => "FINALIZED",
    Voided => "VOIDED",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItemRequest {
    pub display_name: String,
    /// Decimal string
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer_id: String,
    pub currency: String,
    /// Decimal string
    pub amount_due: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<InvoiceLineItemRequest>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInvoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLineItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    pub subscription_id: Option<String>,
    pub invoice_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_due: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_paid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_remaining: String,
    pub due_date: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub line_items: Vec<InvoiceLineItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListInvoicesResponse = ListResponse<InvoiceResponse>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInvoicesParams {
    pub customer_id: Option<String>,
    pub invoice_status: Option<InvoiceStatus>,
    pub list: ListParams,
}

impl ToQuery for ListInvoicesParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "customer_id", self.customer_id.as_ref());
        push_opt(&mut pairs, "invoice_status", self.invoice_status.as_ref());
        pairs.extend(self.list.to_query());
        pairs
    }
}

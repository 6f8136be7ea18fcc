//! Credit notes issued against invoices

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, push_opt, ListParams, ListResponse, QueryPairs, ToQuery};
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditNoteReason {
    Duplicate,
    Fraudulent,
    OrderChange,
    Unfulfilled,
    ProductUnsatisfactory,
    ServiceIssue,
    BillingError,
    SubscriptionCancellation,
}

impl_domain_status_conversions!(CreditNoteReason {
    Duplicate => "DUPLICATE",
    Fraudulent => "FRAUDULENT",
    OrderChange => "ORDER_CHANGE",
    Unfulfilled => "UNFULFILLED",
    ProductUnsatisfactory => "PRODUCT_UNSATISFACTORY",
    ServiceIssue => "SERVICE_ISSUE",
    BillingError => "BILLING_ERROR",
    SubscriptionCancellation => "SUBSCRIPTION_CANCELLATION",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CreditNoteStatus {
    Draft,
    Finalized,
    Voided,
}

impl_domain_status_conversions!(CreditNoteStatus {
    Draft => "DRAFT",
    Finalized => "FINALIZED",
    Voided => "VOIDED",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditNoteLineItemRequest {
    pub invoice_line_item_id: String,
    /// Decimal string
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCreditNoteRequest {
    pub invoice_id: String,
    pub reason: CreditNoteReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<CreditNoteLineItemRequest>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditNoteResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credit_note_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credit_note_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credit_note_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub memo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

pub type ListCreditNotesResponse = ListResponse<CreditNoteResponse>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCreditNotesParams {
    pub invoice_id: Option<String>,
    pub credit_note_status: Option<CreditNoteStatus>,
    pub list: ListParams,
}

impl ToQuery for ListCreditNotesParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "invoice_id", self.invoice_id.as_ref());
        push_opt(&mut pairs, "credit_note_status", self.credit_note_status.as_ref());
        pairs.extend(self.list.to_query());
        pairs
    }
}

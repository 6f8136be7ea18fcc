//! Server error envelope
//!
//! Failed backend calls usually answer with
//! `{"success": false, "error": {"message": ..., "internal_error": ..., "details": {...}}}`.
//! Every field defaults so partial envelopes still parse.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    #[serde(default)]
    pub success: bool,
    pub error: ServerErrorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerErrorDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub internal_error: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: BTreeMap<String, String>,
}

impl ServerError {
    /// Human-readable message, falling back to the internal error text.
    pub fn message(&self) -> &str {
        if self.error.message.is_empty() {
            &self.error.internal_error
        } else {
            &self.error.message
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

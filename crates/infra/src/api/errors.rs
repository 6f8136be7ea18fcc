//! API-specific error types
//!
//! Every failed call resolves to exactly one [`ApiError`] variant. HTTP
//! failures keep the status and the server's error body so callers can show
//! the backend's own message.

use std::fmt;

use flexprice_domain::{FlexPriceError, ServerError};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::http::TransportError;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 - the stored credential was rejected
    Unauthenticated,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 500
    Server,
    /// Any other non-2xx status
    Status,
    /// The request left but no response arrived
    NoResponse,
    /// The request could not be built or its credential could not be read
    RequestSetup,
    /// A 2xx body that does not match the expected type
    InvalidResponse,
    /// Operation the backend does not offer
    Unsupported,
}

/// Error body returned with a failed status
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The backend's standard error envelope
    Server(ServerError),
    /// Any other JSON document
    Json(Value),
    Text(String),
}

impl ErrorBody {
    /// Parse a raw body. Empty bodies yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        if let Ok(server) = serde_json::from_str::<ServerError>(raw) {
            return Some(Self::Server(server));
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(json) => Some(Self::Json(json)),
            Err(_) => Some(Self::Text(raw.to_string())),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Server(server) => {
                let message = server.message();
                (!message.is_empty()).then(|| message.to_string())
            }
            Self::Json(json) => json
                .get("message")
                .or_else(|| json.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string),
            Self::Text(text) => Some(text.clone()),
        }
    }
}

/// Status and body of a failed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub status: u16,
    pub body: Option<ErrorBody>,
}

impl HttpFailure {
    pub fn new(status: StatusCode, body: Option<ErrorBody>) -> Self {
        Self { status: status.as_u16(), body }
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body.as_ref().and_then(ErrorBody::message) {
            Some(message) => write!(f, "status {}: {}", self.status, message),
            None => write!(f, "status {}", self.status),
        }
    }
}

/// API operation errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Unauthenticated ({0})")]
    Unauthenticated(HttpFailure),

    #[error("Forbidden ({0})")]
    Forbidden(HttpFailure),

    #[error("Not found ({0})")]
    NotFound(HttpFailure),

    #[error("Server error ({0})")]
    Server(HttpFailure),

    #[error("Request failed ({0})")]
    Status(HttpFailure),

    #[error("No response received from server")]
    NoResponse(String),

    /// Setup failures keep their original message
    #[error("{0}")]
    RequestSetup(String),

    /// The credential store failed before the request was sent
    #[error(transparent)]
    Credentials(#[from] FlexPriceError),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Unsupported(String),
}

impl ApiError {
    /// Classify a non-2xx status.
    pub fn from_status(status: StatusCode, body: Option<ErrorBody>) -> Self {
        let failure = HttpFailure::new(status, body);
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthenticated(failure),
            StatusCode::FORBIDDEN => Self::Forbidden(failure),
            StatusCode::NOT_FOUND => Self::NotFound(failure),
            StatusCode::INTERNAL_SERVER_ERROR => Self::Server(failure),
            _ => Self::Status(failure),
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthenticated(_) => ApiErrorCategory::Unauthenticated,
            Self::Forbidden(_) => ApiErrorCategory::Forbidden,
            Self::NotFound(_) => ApiErrorCategory::NotFound,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Status(_) => ApiErrorCategory::Status,
            Self::NoResponse(_) => ApiErrorCategory::NoResponse,
            Self::RequestSetup(_) | Self::Credentials(_) => ApiErrorCategory::RequestSetup,
            Self::InvalidResponse(_) => ApiErrorCategory::InvalidResponse,
            Self::Unsupported(_) => ApiErrorCategory::Unsupported,
        }
    }

    pub fn failure(&self) -> Option<&HttpFailure> {
        match self {
            Self::Unauthenticated(failure)
            | Self::Forbidden(failure)
            | Self::NotFound(failure)
            | Self::Server(failure)
            | Self::Status(failure) => Some(failure),
            _ => None,
        }
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        self.failure().map(|failure| failure.status)
    }

    /// The backend's error envelope, when the body carried one
    pub fn server_error(&self) -> Option<&ServerError> {
        match self.failure()?.body.as_ref()? {
            ErrorBody::Server(server) => Some(server),
            _ => None,
        }
    }

    /// Message suitable for display: the server's own text when present.
    pub fn message(&self) -> String {
        self.failure()
            .and_then(|failure| failure.body.as_ref())
            .and_then(ErrorBody::message)
            .unwrap_or_else(|| self.to_string())
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Setup(message) => Self::RequestSetup(message),
            TransportError::NoResponse(detail) => Self::NoResponse(detail),
        }
    }
}

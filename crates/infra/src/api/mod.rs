//! API access layer for the FlexPrice backend
//!
//! This module provides the typed HTTP client shared by the dashboard and the
//! resource facade.
//!
//! # Architecture
//!
//! - Request interceptors attach credentials before every call
//! - Bodies are sanitized (top-level `null`/`""` removed) before transmission
//! - Successful responses are unwrapped to their decoded body
//! - Failures are classified by status; response interceptors observe them
//! - Navigation on 401 is left to [`SessionGuard`]
//!
//! No retries: every request is attempted once with a fixed timeout.

pub mod client;
pub mod errors;
pub mod interceptor;
pub mod sanitize;
pub mod session;

pub use client::{ApiClient, ApiClientBuilder};
pub use errors::{ApiError, ApiErrorCategory, ErrorBody, HttpFailure};
pub use interceptor::{
    ApiKeyAuth, BearerAuth, ClearCredentialsOnUnauthorized, FailureLogger, RequestInterceptor,
    ResponseInterceptor,
};
pub use sanitize::sanitize;
pub use session::SessionGuard;

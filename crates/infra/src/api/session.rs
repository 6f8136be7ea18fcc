//! Session guard
//!
//! The transport reports a rejected credential as
//! [`ApiError::Unauthenticated`]; the guard turns that report into a redirect
//! through the [`SessionService`] and hands the original error back.

use std::future::Future;

use flexprice_core::SessionService;

use super::errors::ApiError;

#[derive(Clone)]
pub struct SessionGuard {
    session: SessionService,
}

impl SessionGuard {
    pub fn new(session: SessionService) -> Self {
        Self { session }
    }

    /// Redirect to login on 401; the result is returned unchanged.
    pub fn observe<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            if err.is_unauthenticated() {
                self.session.redirect_to_login();
            }
        }
        result
    }

    pub async fn run<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.observe(call.await)
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }
}

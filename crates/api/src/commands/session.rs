//! Sign-in and sign-out commands

use std::time::Instant;

use flexprice_domain::{FlexPriceError, LoginRequest};
use flexprice_infra::ApiError;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Store a token obtained out of band (e.g. pasted from the web dashboard).
pub async fn sign_in_with_token(context: &AppContext, token: &str) -> Result<(), FlexPriceError> {
    context.session.sign_in(token).await
}

/// Exchange email and password for a token and store it.
pub async fn sign_in_with_password(
    context: &AppContext,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let started = Instant::now();
    let request = LoginRequest { email: email.to_string(), password: password.to_string() };

    let result: Result<(), ApiError> = async {
        let response = context.guard.run(context.facade().login(&request)).await?;
        context.session.sign_in(&response.token).await?;
        info!(user_id = %response.user_id, "signed in");
        Ok(())
    }
    .await;

    log_command_execution("session::sign_in", started.elapsed(), result.as_ref().err());
    result
}

pub async fn sign_out(context: &AppContext) -> Result<(), FlexPriceError> {
    context.session.sign_out().await
}

//! Conversions from external infrastructure errors into domain errors.

use flexprice_domain::FlexPriceError;
use keyring::Error as KeyringError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FlexPriceError);

impl From<InfraError> for FlexPriceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FlexPriceError> for InfraError {
    fn from(value: FlexPriceError) -> Self {
        InfraError(value)
    }
}

trait IntoFlexPriceError {
    fn into_flexprice(self) -> FlexPriceError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → FlexPriceError */
/* -------------------------------------------------------------------------- */

impl IntoFlexPriceError for KeyringError {
    fn into_flexprice(self) -> FlexPriceError {
        use KeyringError::*;

        let description = self.to_string();

        match self {
            NoEntry => FlexPriceError::NotFound("keychain entry not found".into()),
            BadEncoding(_) => {
                FlexPriceError::Storage("credential in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => FlexPriceError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                FlexPriceError::Storage(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            Ambiguous(entries) => FlexPriceError::Storage(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => FlexPriceError::Storage(format!("keychain platform error: {err}")),
            NoStorageAccess(err) => {
                FlexPriceError::Storage(format!("unable to access secure storage: {err}"))
            }
            _ => FlexPriceError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_flexprice())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → FlexPriceError */
/* -------------------------------------------------------------------------- */

impl IntoFlexPriceError for std::io::Error {
    fn into_flexprice(self) -> FlexPriceError {
        match self.kind() {
            std::io::ErrorKind::NotFound => FlexPriceError::NotFound(self.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FlexPriceError::Storage(format!("permission denied: {self}"))
            }
            _ => FlexPriceError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_flexprice())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → FlexPriceError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(FlexPriceError::Storage(format!("malformed credential file: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

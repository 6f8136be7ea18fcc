//! Macro for implementing Display and FromStr for wire enums
//!
//! Backend enums travel as fixed strings (`"immediate"`, `"SUM"`, `"DAY"`).
//! The macro keeps the `Display` output identical to the wire value so the
//! same mapping serves query strings, logs and parsing.
//!
//! # Example
//!
//! ```rust
//! use flexprice_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum InvoiceStatus {
//!     Draft,
//!     Finalized,
//!     Voided,
//! }
//!
//! impl_domain_status_conversions!(InvoiceStatus {
//!     Draft => "DRAFT",
//!     Finalized => "FINALIZED",
//!     Voided => "VOIDED",
//! });
//!
//! assert_eq!(InvoiceStatus::Draft.to_string(), "DRAFT");
//! assert_eq!("finalized".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Finalized));
//! ```

/// Implements Display and FromStr traits for wire enums
///
/// - `Display` writes the exact wire string.
/// - `FromStr` accepts the wire string in any ASCII case.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

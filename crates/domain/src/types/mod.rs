//! Domain types and models
//!
//! One module per backend resource group. Field names follow the backend's
//! snake_case JSON; optional request fields are omitted when unset.

pub mod addons;
pub mod auth;
pub mod common;
pub mod coupons;
pub mod credit_notes;
pub mod customers;
pub mod entitlements;
pub mod events;
pub mod features;
pub mod invoices;
pub mod plans;
pub mod server_error;
pub mod subscriptions;

pub use addons::*;
pub use auth::*;
pub use common::*;
pub use coupons::*;
pub use credit_notes::*;
pub use customers::*;
pub use entitlements::*;
pub use events::*;
pub use features::*;
pub use invoices::*;
pub use plans::*;
pub use server_error::*;
pub use subscriptions::*;

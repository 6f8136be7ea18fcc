//! FlexPrice resource facade
//!
//! [`FlexPrice`] exposes one method per backend operation on top of
//! per-resource sub-clients that share a single API-key-authenticated
//! [`ApiClient`](crate::api::ApiClient). [`FlexPriceHandle`] makes the
//! facade reconfigurable at runtime.

pub mod addons;
pub mod auth;
pub mod coupons;
pub mod credit_notes;
pub mod cursor;
pub mod customers;
pub mod entitlements;
pub mod events;
pub mod facade;
pub mod features;
pub mod handle;
pub mod invoices;
pub mod plans;
pub mod subscriptions;

pub use addons::AddonsApi;
pub use auth::AuthApi;
pub use coupons::CouponsApi;
pub use credit_notes::CreditNotesApi;
pub use cursor::EventCursor;
pub use customers::CustomersApi;
pub use entitlements::EntitlementsApi;
pub use events::EventsApi;
pub use facade::{FlexPrice, DASHBOARD_EVENT_SOURCE};
pub use features::FeaturesApi;
pub use handle::FlexPriceHandle;
pub use invoices::InvoicesApi;
pub use plans::PlansApi;
pub use subscriptions::SubscriptionsApi;

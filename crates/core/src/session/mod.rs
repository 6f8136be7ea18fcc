//! Session management

pub mod ports;
pub mod service;

pub use ports::Navigator;
pub use service::SessionService;

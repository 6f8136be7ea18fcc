//! Dashboard commands - controller layer between the pages and the API

mod dashboard;
mod session;

pub use dashboard::*;
pub use session::*;

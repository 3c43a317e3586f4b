//! Domain layer - Pure client abstractions
//!
//! Only the backend trait and the client error type live here.

pub mod errors;
pub mod repositories;

pub use errors::ClientError;
pub use repositories::*;

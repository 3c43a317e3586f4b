//! Infrastructure layer - Transport implementations
//!
//! This layer contains:
//! - The JSON HTTP client (http)
//! - The HTTP implementation of the backend trait (backend)

pub mod backend;
pub mod http;

pub use http::{HttpClient, RequestOptions};

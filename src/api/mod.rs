//! Data-access functions, one per backend operation.
//!
//! Each function fixes the method and path template and hands the call to
//! [`crate::infrastructure::http::HttpClient`]. No validation happens here and
//! errors propagate unchanged.

pub mod customers;
pub mod employees;
pub mod movies;
pub mod rentals;

pub use customers::*;
pub use employees::*;
pub use movies::*;
pub use rentals::*;

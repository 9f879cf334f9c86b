//! HTTP service implementation.
//!
//! ## Structure
//!
//! - [`handler`] - Router and request handlers for `/romannumeral`.
//! - [`error`] - Mapping of conversion failures to HTTP responses.

pub mod error;
pub mod handler;

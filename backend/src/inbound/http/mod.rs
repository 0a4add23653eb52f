//! Inbound HTTP adapter.
//!
//! Purpose: translate HTTP requests into domain port calls and domain
//! results back into JSON responses.

pub mod employees;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;

//! Employee registry backend.
//!
//! A small CRUD HTTP API over a PostgreSQL `employees` table, organised as a
//! hexagon: the domain owns validation and use-cases, the inbound HTTP
//! adapter translates requests, and the outbound Diesel adapter persists.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

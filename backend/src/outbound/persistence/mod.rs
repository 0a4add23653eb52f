//! PostgreSQL persistence adapter.
//!
//! Purpose: implement the domain's repository port on top of Diesel, with
//! connection pooling via `diesel-async` and `bb8`.

pub mod diesel_employee_repository;
pub(crate) mod models;
pub mod pool;
pub mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

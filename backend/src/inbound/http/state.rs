//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeesCommand, EmployeesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeesCommand>,
    pub employees_query: Arc<dyn EmployeesQuery>,
}

impl HttpState {
    /// Bundle the employee ports for injection into handlers.
    pub fn new(
        employees: Arc<dyn EmployeesCommand>,
        employees_query: Arc<dyn EmployeesQuery>,
    ) -> Self {
        Self {
            employees,
            employees_query,
        }
    }
}

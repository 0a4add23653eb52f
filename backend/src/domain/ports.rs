//! Domain ports for employee persistence and the driving use-cases.
//!
//! The driven [`EmployeeRepository`] port is implemented by the PostgreSQL
//! adapter; the driving [`EmployeesCommand`]/[`EmployeesQuery`] ports are
//! implemented by [`crate::domain::EmployeeService`] and consumed by the
//! HTTP handlers. Each trait exposes strongly typed errors so adapters map
//! their failures into predictable variants.

use std::fmt;

use async_trait::async_trait;

use super::{Employee, EmployeeDraft, EmployeeId, Error};

/// Which uniqueness constraint a duplicate write collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    EmployeeNumber,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::EmployeeNumber => f.write_str("employee number"),
        }
    }
}

/// Errors surfaced by employee repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeRepositoryError {
    /// Repository connection could not be established or was lost.
    #[error("employee repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("employee repository query failed: {message}")]
    Query { message: String },
    /// A uniqueness constraint rejected the write; nothing was committed.
    #[error("duplicate {field} detected")]
    Duplicate { field: DuplicateField },
}

impl EmployeeRepositoryError {
    /// Helper for connection-level failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for uniqueness violations.
    pub fn duplicate(field: DuplicateField) -> Self {
        Self::Duplicate { field }
    }
}

/// Port for durable employee storage.
///
/// Absence is signalled through `Option`/`bool` return values rather than
/// an error variant, so adapters never have to synthesise "not found"
/// failures; classification into a 404 happens in the domain service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee and return the stored record with its
    /// generated identifier.
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError>;

    /// Fetch every stored employee in primary-key order.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch a single employee, or `None` when the identifier is unknown.
    async fn find_by_id(&self, id: EmployeeId)
        -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Overwrite every mutable field of an existing employee.
    ///
    /// Returns `None` when the identifier is unknown.
    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Remove an employee. Returns `false` when the identifier is unknown.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}

/// Driving port for employee mutations.
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Persist a validated draft as a new employee.
    async fn create(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Replace the stored fields of an existing employee.
    async fn update(&self, id: EmployeeId, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Permanently remove an employee.
    async fn delete(&self, id: EmployeeId) -> Result<(), Error>;
}

/// Driving port for employee reads.
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Return every stored employee.
    async fn list(&self) -> Result<Vec<Employee>, Error>;

    /// Return a single employee by identifier.
    async fn fetch(&self, id: EmployeeId) -> Result<Employee, Error>;
}

//! Core domain model for the employee registry.
//!
//! The domain is transport and storage agnostic: adapters depend on the
//! ports declared here, never the other way round.

pub mod employee;
pub mod employees_service;
pub mod error;
pub mod ports;

pub use employee::{
    EmailAddress, Employee, EmployeeDraft, EmployeeId, EmployeeNumber, EmployeeValidationError,
    EMPLOYEE_NUMBER_MAX, EMPLOYEE_NUMBER_MIN,
};
pub use employees_service::EmployeeService;
pub use error::{Error, ErrorCode, ErrorValidationError};

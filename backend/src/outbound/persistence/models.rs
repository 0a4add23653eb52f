//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::employees;

/// Row struct for reading from the employees table.
///
/// Audit timestamps are deliberately not selected; the domain has no use
/// for them.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub role: String,
    pub employee_number: i32,
    pub organisation: String,
}

/// Insertable struct for creating new employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub title: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub employee_number: i32,
    pub organisation: &'a str,
}

/// Changeset struct for replacing the fields of an existing employee.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub title: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub employee_number: i32,
    pub organisation: &'a str,
}

//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `EmployeeRepository` port, providing
//! durable storage for employee records. Uniqueness violations on the email
//! and employee-number constraints are classified into duplicate errors by
//! constraint name.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{DuplicateField, EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{EmailAddress, Employee, EmployeeDraft, EmployeeId, EmployeeNumber};

use super::models::{EmployeeChangeset, EmployeeRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

const EMAIL_CONSTRAINT: &str = "employees_email_key";
const EMPLOYEE_NUMBER_CONSTRAINT: &str = "employees_employee_number_key";

/// Diesel-backed implementation of the `EmployeeRepository` port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain employee repository errors.
fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EmployeeRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain employee repository errors.
fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EmployeeRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => EmployeeRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            match info.constraint_name() {
                Some(EMAIL_CONSTRAINT) => {
                    EmployeeRepositoryError::duplicate(DuplicateField::Email)
                }
                Some(EMPLOYEE_NUMBER_CONSTRAINT) => {
                    EmployeeRepositoryError::duplicate(DuplicateField::EmployeeNumber)
                }
                _ => EmployeeRepositoryError::query("unique constraint violated"),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeeRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => {
            EmployeeRepositoryError::query(format!("database error: {}", info.message()))
        }
        _ => EmployeeRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain Employee.
///
/// The row has already passed the table constraints, so validation
/// failures here indicate corrupted data rather than bad input.
fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeeRepositoryError> {
    let email = EmailAddress::new(row.email).map_err(|err| {
        EmployeeRepositoryError::query(format!("corrupted email in database: {err}"))
    })?;
    let employee_number = EmployeeNumber::new(row.employee_number).map_err(|err| {
        EmployeeRepositoryError::query(format!("corrupted employee number in database: {err}"))
    })?;

    Ok(Employee {
        id: EmployeeId::from(row.id),
        first_name: row.first_name,
        last_name: row.last_name,
        email,
        title: row.title,
        role: row.role,
        employee_number,
        organisation: row.organisation,
    })
}

fn draft_to_new_row(draft: &EmployeeDraft) -> NewEmployeeRow<'_> {
    NewEmployeeRow {
        first_name: &draft.first_name,
        last_name: &draft.last_name,
        title: &draft.title,
        email: draft.email.as_str(),
        role: &draft.role,
        employee_number: draft.employee_number.value(),
        organisation: &draft.organisation,
    }
}

fn draft_to_changeset(draft: &EmployeeDraft) -> EmployeeChangeset<'_> {
    EmployeeChangeset {
        first_name: &draft.first_name,
        last_name: &draft.last_name,
        title: &draft.title,
        email: draft.email.as_str(),
        role: &draft.role,
        employee_number: draft.employee_number.value(),
        organisation: &draft.organisation,
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(draft_to_new_row(draft))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_employee(row)
    }

    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.as_i32())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = diesel::update(employees::table.find(id.as_i32()))
            .set((
                draft_to_changeset(draft),
                employees::updated_at.eq(diesel::dsl::now),
            ))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(employees::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

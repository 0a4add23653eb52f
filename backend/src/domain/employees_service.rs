//! Employee use-cases built on top of the repository port.
//!
//! [`EmployeeService`] implements the driving ports and owns the policy
//! decisions: how repository failures map onto domain errors and when a
//! missing row becomes a not-found error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::ports::{
    DuplicateField, EmployeeRepository, EmployeeRepositoryError, EmployeesCommand, EmployeesQuery,
};
use super::{Employee, EmployeeDraft, EmployeeId, Error};

/// Application service for employee reads and writes.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    /// Construct a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn not_found(id: EmployeeId) -> Error {
        Error::not_found(format!("no employee with id {id}"))
    }
}

fn map_repository_error(err: EmployeeRepositoryError) -> Error {
    match err {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeeRepositoryError::Duplicate {
            field: DuplicateField::Email,
        } => Error::conflict("employee with this email already exists")
            .with_details(json!({ "field": "email", "code": "duplicate_email" })),
        EmployeeRepositoryError::Duplicate {
            field: DuplicateField::EmployeeNumber,
        } => Error::conflict("employee with this employee number already exists").with_details(
            json!({ "field": "employee_number", "code": "duplicate_employee_number" }),
        ),
    }
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> EmployeesCommand for EmployeeService<R> {
    async fn create(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: EmployeeId, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(Self::not_found(id))
        }
    }
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> EmployeesQuery for EmployeeService<R> {
    async fn list(&self) -> Result<Vec<Employee>, Error> {
        self.repository.list().await.map_err(map_repository_error)
    }

    async fn fetch(&self, id: EmployeeId) -> Result<Employee, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Self::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockEmployeeRepository;
    use crate::domain::{EmailAddress, EmployeeNumber, ErrorCode};
    use mockall::predicate::eq;

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: EmailAddress::new("jane.doe@example.com").expect("valid email"),
            title: "Engineer".into(),
            role: "IC".into(),
            employee_number: EmployeeNumber::new(1234).expect("four digits"),
            organisation: "Platform".into(),
        }
    }

    fn stored(id: i32) -> Employee {
        let d = draft();
        Employee {
            id: EmployeeId::from(id),
            first_name: d.first_name,
            last_name: d.last_name,
            email: d.email,
            title: d.title,
            role: d.role,
            employee_number: d.employee_number,
            organisation: d.organisation,
        }
    }

    #[tokio::test]
    async fn create_returns_the_stored_employee() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert()
            .with(eq(draft()))
            .returning(|_| Ok(stored(1)));
        let service = EmployeeService::new(Arc::new(repo));

        let employee = service.create(draft()).await.expect("created");
        assert_eq!(employee, stored(1));
    }

    #[tokio::test]
    async fn create_maps_duplicate_email_to_conflict() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert()
            .returning(|_| Err(EmployeeRepositoryError::duplicate(DuplicateField::Email)));
        let service = EmployeeService::new(Arc::new(repo));

        let err = service.create(draft()).await.expect_err("duplicate");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "employee with this email already exists");
        assert_eq!(
            err.details().and_then(|d| d.pointer("/code").cloned()),
            Some(serde_json::json!("duplicate_email"))
        );
    }

    #[tokio::test]
    async fn create_maps_duplicate_number_to_conflict() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert().returning(|_| {
            Err(EmployeeRepositoryError::duplicate(
                DuplicateField::EmployeeNumber,
            ))
        });
        let service = EmployeeService::new(Arc::new(repo));

        let err = service.create(draft()).await.expect_err("duplicate");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(
            err.message(),
            "employee with this employee number already exists"
        );
    }

    #[tokio::test]
    async fn fetch_missing_employee_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(EmployeeId::from(42)))
            .returning(|_| Ok(None));
        let service = EmployeeService::new(Arc::new(repo));

        let err = service
            .fetch(EmployeeId::from(42))
            .await
            .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "no employee with id 42");
    }

    #[tokio::test]
    async fn update_missing_employee_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));
        let service = EmployeeService::new(Arc::new(repo));

        let err = service
            .update(EmployeeId::from(9), draft())
            .await
            .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_missing_employee_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = EmployeeService::new(Arc::new(repo));

        let err = service
            .delete(EmployeeId::from(7))
            .await
            .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn connection_failures_surface_as_service_unavailable() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list()
            .returning(|| Err(EmployeeRepositoryError::connection("pool exhausted")));
        let service = EmployeeService::new(Arc::new(repo));

        let err = service.list().await.expect_err("unavailable");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(
            err.message(),
            "employee repository unavailable: pool exhausted"
        );
    }

    #[tokio::test]
    async fn query_failures_surface_as_internal_errors() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list()
            .returning(|| Err(EmployeeRepositoryError::query("relation missing")));
        let service = EmployeeService::new(Arc::new(repo));

        let err = service.list().await.expect_err("internal");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "employee repository error: relation missing");
    }
}

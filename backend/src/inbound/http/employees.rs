//! Employee HTTP handlers.
//!
//! ```text
//! GET    /v1/employees/
//! POST   /v1/employees/
//! GET    /v1/employees/{id}
//! PUT    /v1/employees/{id}
//! DELETE /v1/employees/{id}
//! ```
//!
//! Mutations answer with a `{"Message": "..."}` envelope; reads return the
//! employee records themselves.

use actix_web::{delete, get, post, put, web, HttpResponse, Scope};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::employee::EmployeeValidationError;
use crate::domain::{EmailAddress, Employee, EmployeeDraft, EmployeeId, EmployeeNumber, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Envelope message returned after a successful create.
pub const CREATED_MESSAGE: &str = "New employee has been created successfully.";
/// Envelope message returned after a successful update.
pub const UPDATED_MESSAGE: &str = "New employee has been updated successfully.";
/// Envelope message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Employee has been deleted successfully.";

/// Request payload for creating or replacing an employee.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    pub title: String,
    pub role: String,
    #[schema(example = 1234)]
    pub employee_number: i32,
    pub organisation: String,
}

/// Response payload describing a stored employee.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub role: String,
    pub employee_number: i32,
    pub organisation: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id.as_i32(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email.into(),
            title: value.title,
            role: value.role,
            employee_number: value.employee_number.value(),
            organisation: value.organisation,
        }
    }
}

/// Success envelope for mutations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    #[schema(example = "New employee has been created successfully.")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

fn map_validation_error(err: EmployeeValidationError) -> Error {
    let (field, code) = match err {
        EmployeeValidationError::InvalidEmail => ("email", "invalid_email"),
        EmployeeValidationError::EmployeeNumberNotPositive
        | EmployeeValidationError::EmployeeNumberOutOfRange => {
            ("employee_number", "invalid_employee_number")
        }
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

impl TryFrom<EmployeeRequest> for EmployeeDraft {
    type Error = Error;

    fn try_from(value: EmployeeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: EmailAddress::new(value.email).map_err(map_validation_error)?,
            title: value.title,
            role: value.role,
            employee_number: EmployeeNumber::new(value.employee_number)
                .map_err(map_validation_error)?,
            organisation: value.organisation,
        })
    }
}

/// List every stored employee.
#[utoipa::path(
    get,
    path = "/v1/employees/",
    responses(
        (status = 200, description = "All stored employees", body = [EmployeeResponse]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let employees = state.employees_query.list().await?;
    let payload: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(payload))
}

/// Create a new employee.
#[utoipa::path(
    post,
    path = "/v1/employees/",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = MessageResponse),
        (status = 400, description = "Validation failure or duplicate", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = EmployeeDraft::try_from(payload.into_inner())?;
    state.employees.create(draft).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(CREATED_MESSAGE)))
}

/// Fetch a single employee by identifier.
#[utoipa::path(
    get,
    path = "/v1/employees/{id}",
    params(("id" = i32, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "The requested employee", body = EmployeeResponse),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let employee = state
        .employees_query
        .fetch(EmployeeId::from(id.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Replace every stored field of an existing employee.
#[utoipa::path(
    put,
    path = "/v1/employees/{id}",
    params(("id" = i32, Path, description = "Employee identifier")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = MessageResponse),
        (status = 400, description = "Validation failure or duplicate", body = Error),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = EmployeeDraft::try_from(payload.into_inner())?;
    state
        .employees
        .update(EmployeeId::from(id.into_inner()), draft)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(UPDATED_MESSAGE)))
}

/// Permanently remove an employee.
#[utoipa::path(
    delete,
    path = "/v1/employees/{id}",
    params(("id" = i32, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .employees
        .delete(EmployeeId::from(id.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(DELETED_MESSAGE)))
}

/// Collect the employee handlers under their versioned prefix.
pub fn scope() -> Scope {
    web::scope("/v1/employees")
        .service(list_employees)
        .service(create_employee)
        .service(get_employee)
        .service(update_employee)
        .service(delete_employee)
}

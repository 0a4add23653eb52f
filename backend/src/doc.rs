//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. The generated specification is served by
//! Swagger UI in debug builds at `/docs`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::employees::{EmployeeRequest, EmployeeResponse, MessageResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee registry API",
        description = "CRUD interface for employee records, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeRequest,
        EmployeeResponse,
        MessageResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "employees", description = "Employee record management"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

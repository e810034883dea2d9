use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{CreateEmployeeRequest, EmployeeResponse},
        Error,
    },
    AppState,
};

use super::extract::{EmployeeId, ValidatedJson};

#[derive(OpenApi)]
#[openapi(paths(
    create_employee_handler,
    get_all_employees_handler,
    get_employee_handler,
    update_employee_handler,
    delete_employee_handler
))]
/// Defines the OpenAPI spec for employee endpoints
pub struct EmployeesApi;

/// Used to group employee endpoints together in the OpenAPI documentation
pub const EMPLOYEE_API_GROUP: &str = "EMPLOYEE";

/// Builds a router for all the employee routes
pub fn employee_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(get_all_employees_handler).post(create_employee_handler),
        )
        .route(
            "/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = EMPLOYEE_API_GROUP,
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee successfully created", body = EmployeeResponse),
        (status = 400, description = "Invalid request body", body = crate::models::dto::ErrorMessage),
        (status = 500, description = "Storage failure", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn create_employee_handler(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, Error> {
    let employee = state.employees.create_employee(body).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = EMPLOYEE_API_GROUP,
    responses(
        (status = 200, description = "All employees, newest first", body = [EmployeeResponse]),
        (status = 500, description = "Storage failure", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn get_all_employees_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeResponse>>, Error> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = EMPLOYEE_API_GROUP,
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Invalid employee id", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Employee not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Employee ID")
    )
)]
pub async fn get_employee_handler(
    State(state): State<Arc<AppState>>,
    EmployeeId(id): EmployeeId,
) -> Result<Json<EmployeeResponse>, Error> {
    let employee = state.employees.get_employee(id).await?;
    Ok(Json(employee))
}

#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    tag = EMPLOYEE_API_GROUP,
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee successfully updated", body = EmployeeResponse),
        (status = 400, description = "Invalid employee id or request body", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Employee not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Employee ID")
    )
)]
pub async fn update_employee_handler(
    State(state): State<Arc<AppState>>,
    EmployeeId(id): EmployeeId,
    ValidatedJson(body): ValidatedJson<CreateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, Error> {
    let employee = state.employees.update_employee(id, body).await?;
    Ok(Json(employee))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = EMPLOYEE_API_GROUP,
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid employee id", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Employee not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Employee ID")
    )
)]
pub async fn delete_employee_handler(
    State(state): State<Arc<AppState>>,
    EmployeeId(id): EmployeeId,
) -> Result<StatusCode, Error> {
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

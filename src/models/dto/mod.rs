pub mod employee;
pub mod message;
pub use employee::*;
pub use message::*;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    CreateEmployeeRequest,
    EmployeeResponse,
    ErrorMessage,
    HealthStatus,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;

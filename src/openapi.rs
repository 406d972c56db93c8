use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. The generated document backs the Swagger UI mounted by the
/// server binary.
///
/// # Endpoints
/// - Root: `GET /`
/// - Health Check: `GET /health`
/// - Shared Utilities: `GET /api/shared/{greeting,user,validate-email,all}`
///
/// # Note
/// The spec is generated at compile time from these annotations. Any change
/// to the API surface should be reflected here first to keep the
/// documentation accurate.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home::index,
        crate::routes::health::health,
        crate::routes::shared::greeting,
        crate::routes::shared::user,
        crate::routes::shared::validate_email,
        crate::routes::shared::all,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::shared::users::MockUser,
            crate::routes::shared::GreetingData,
            crate::routes::shared::EmailValidationData,
            crate::routes::shared::EmailValidationChecks,
            crate::routes::shared::AllTestData,
        )
    ),
    tags(
        (name = "Home", description = "Smoke-test endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Shared Utilities", description = "Demo endpoints exercising the shared utility functions")
    ),
    info(
        description = "Starter API exposing the shared utility functions over JSON endpoints",
        title = "Starter API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

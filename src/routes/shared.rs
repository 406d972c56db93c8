use actix_web::{HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::users::MockUser;
use crate::shared::{
    SystemClock, create_api_response, generate_greeting, generate_mock_user, is_valid_email,
};

#[derive(Debug, Deserialize)]
pub struct GreetingQuery {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateEmailQuery {
    email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingData {
    pub greeting: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidationData {
    pub email: String,
    pub is_valid: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmailValidationChecks {
    pub valid: bool,
    pub invalid: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllTestData {
    pub greeting: String,
    pub user: MockUser,
    pub email_validation: EmailValidationChecks,
}

/// # Greeting Endpoint
///
/// Builds a time-of-day greeting for the caller-supplied name.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `name` (required): Name to greet; an empty value counts as missing
///
/// ## Responses
/// - **200 OK**: Envelope with `data.greeting` and `data.name`
/// - **400 Bad Request**: `name` missing or empty
#[utoipa::path(
    get,
    path = "/api/shared/greeting",
    params(
        ("name" = Option<String>, Query, description = "Name to greet")
    ),
    responses(
        (status = 200, description = "Greeting generated"),
        (status = 400, description = "Name parameter missing")
    ),
    tag = "Shared Utilities"
)]
#[get("/greeting")]
pub async fn greeting(query: web::Query<GreetingQuery>) -> impl Responder {
    match query.name.as_deref() {
        Some(name) if !name.is_empty() => {
            let greeting = generate_greeting(name, &SystemClock);
            HttpResponse::Ok().json(create_api_response(
                true,
                "Greeting generated successfully",
                Some(GreetingData {
                    greeting,
                    name: name.to_string(),
                }),
                &SystemClock,
            ))
        }
        _ => HttpResponse::BadRequest().json(create_api_response(
            false,
            "Name parameter is required",
            None::<GreetingData>,
            &SystemClock,
        )),
    }
}

/// # Mock User Endpoint
///
/// Returns the deterministic sample user for an integer id.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `id` (required): Integer id; anything that does not parse as an
///     integer is rejected
///
/// ## Responses
/// - **200 OK**: Envelope with the generated user as `data`
/// - **400 Bad Request**: `id` missing, empty, or not an integer
#[utoipa::path(
    get,
    path = "/api/shared/user",
    params(
        ("id" = Option<i64>, Query, description = "Integer id selecting the mock user")
    ),
    responses(
        (status = 200, description = "Mock user generated"),
        (status = 400, description = "Id parameter missing or not an integer")
    ),
    tag = "Shared Utilities"
)]
#[get("/user")]
pub async fn user(query: web::Query<UserQuery>) -> impl Responder {
    let id = query
        .id
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<i64>().ok());

    match id {
        Some(id) => HttpResponse::Ok().json(create_api_response(
            true,
            "Mock user generated successfully",
            Some(generate_mock_user(id, &SystemClock)),
            &SystemClock,
        )),
        None => HttpResponse::BadRequest().json(create_api_response(
            false,
            "Valid ID parameter is required",
            None::<MockUser>,
            &SystemClock,
        )),
    }
}

/// # Email Validation Endpoint
///
/// Runs the shared permissive email check against the supplied address.
/// Validation failure is still a 200: the outcome is reported inside the
/// envelope, the error status is reserved for a missing parameter.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `email` (required): Address to check
///
/// ## Responses
/// - **200 OK**: Envelope with `data.isValid` and a verdict message
/// - **400 Bad Request**: `email` missing or empty
#[utoipa::path(
    get,
    path = "/api/shared/validate-email",
    params(
        ("email" = Option<String>, Query, description = "Email address to check")
    ),
    responses(
        (status = 200, description = "Validation verdict in the envelope"),
        (status = 400, description = "Email parameter missing")
    ),
    tag = "Shared Utilities"
)]
#[get("/validate-email")]
pub async fn validate_email(query: web::Query<ValidateEmailQuery>) -> impl Responder {
    match query.email.as_deref() {
        Some(email) if !email.is_empty() => {
            let is_valid = is_valid_email(email);
            let message = if is_valid {
                "Valid email format"
            } else {
                "Invalid email format"
            };

            HttpResponse::Ok().json(create_api_response(
                true,
                "Email validation completed",
                Some(EmailValidationData {
                    email: email.to_string(),
                    is_valid,
                    message: message.to_string(),
                }),
                &SystemClock,
            ))
        }
        _ => HttpResponse::BadRequest().json(create_api_response(
            false,
            "Email parameter is required",
            None::<EmailValidationData>,
            &SystemClock,
        )),
    }
}

/// # Combined Demo Endpoint
///
/// Exercises every shared utility in one call: a greeting for `Developer`,
/// the mock user for id 1, and the email check against one valid and one
/// invalid fixture. The demo client fetches this endpoint to compare
/// server-side output with its own local calls.
///
/// ## Responses
/// - **200 OK**: Envelope with `greeting`, `user` and `emailValidation`
#[utoipa::path(
    get,
    path = "/api/shared/all",
    responses(
        (status = 200, description = "Combined output of all shared utilities")
    ),
    tag = "Shared Utilities"
)]
#[get("/all")]
pub async fn all() -> impl Responder {
    let clock = SystemClock;
    let test_data = AllTestData {
        greeting: generate_greeting("Developer", &clock),
        user: generate_mock_user(1, &clock),
        email_validation: EmailValidationChecks {
            valid: is_valid_email("test@example.com"),
            invalid: is_valid_email("invalid-email"),
        },
    };

    HttpResponse::Ok().json(create_api_response(
        true,
        "All shared functions tested successfully",
        Some(test_data),
        &clock,
    ))
}

/// Registers the shared-utility endpoints. Mounted under `/api/shared` by
/// [`crate::routes::configure`].
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(greeting)
        .service(user)
        .service(validate_email)
        .service(all);
}

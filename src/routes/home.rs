use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// # Root Endpoint
///
/// Smoke-test route confirming the server is up and routing works.
///
/// ## Response
///
/// - **200 OK**: `{"hello": "world"}`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Hello world body")
    ),
    tag = "Home"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "hello": "world" }))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(index);
}

use actix_web::{App, HttpServer};
use starter_api::config::Config;
use starter_api::logging::{self, RequestLogger};
use starter_api::openapi::ApiDoc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Starter API Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - The shared-utility demo endpoints under `/api/shared`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Request logging and the configured CORS policy
///
/// # Endpoints
/// - Root: `GET /`
/// - Health: `GET /health`
/// - Shared utilities: `/api/shared/{greeting,user,validate-email,all}`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default (`HOST`/`PORT`)
/// - Cross-origin callers allowed per `CORS_ALLOWED_ORIGINS`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env();
    info!("starting server on {}:{}", config.host, config.port);

    let app_config = config.clone();
    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(starter_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
            .wrap(app_config.cors())
            // Registered last so it wraps everything, CORS preflights included
            .wrap(RequestLogger)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

use actix_web::web;

/// # Root Endpoint
///
/// `GET /` smoke-test route returning `{"hello": "world"}`.
pub mod home;

/// # Health Check Endpoint
///
/// `GET /health` status endpoint with an RFC 3339 timestamp.
pub mod health;

/// # Shared Utility Endpoints
///
/// The `/api/shared` group: each route feeds query parameters into one
/// shared utility function and wraps the result in the response envelope.
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/shared/greeting?name=John
/// GET /api/shared/user?id=1
/// GET /api/shared/validate-email?email=test@example.com
/// GET /api/shared/all
/// ```
pub mod shared;

/// # API Route Configuration
///
/// Mounts the root and health endpoints at the top level and the shared
/// utility group under the `/api/shared` prefix.
pub fn configure(cfg: &mut web::ServiceConfig) {
    home::configure_routes(cfg);
    health::configure_routes(cfg);
    cfg.service(web::scope("/api/shared").configure(shared::configure_routes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_all_route_groups_are_mounted() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/", "/health", "/api/shared/all"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success(), "expected 200 for {}", uri);
        }
    }

    #[actix_web::test]
    async fn test_shared_routes_only_exist_under_prefix() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/greeting?name=John").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_unknown_routes_return_404() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/non-existent-route", "/api/invalid"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 404, "expected 404 for {}", uri);
        }
    }
}

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::Error;
use std::future::{Ready, ready};
use std::pin::Pin;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Honors `RUST_LOG` and defaults
/// to `info` when the variable is unset or unparsable.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Middleware logging one line per request once the response is ready:
/// method, path with query string, status code and elapsed milliseconds.
///
/// ```text
/// GET /api/shared/user?id=1 200 - 3ms
/// ```
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().clone();
        let url = match req.query_string() {
            "" => req.path().to_owned(),
            query => format!("{}?{}", req.path(), query),
        };
        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let duration = started.elapsed().as_millis();
            info!("{} {} {} - {}ms", method, url, res.status().as_u16(), duration);
            Ok(res)
        })
    }
}

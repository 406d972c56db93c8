/// # Shared API Types
///
/// Inert pagination and error wire shapes from the shared contract. Nothing
/// serves them yet; they pin the JSON layout future list endpoints will use.
pub mod api;

/// # Health Status Response
///
/// Status/timestamp pair returned by the health check endpoint.
pub mod health;

/// # User Account Types
///
/// Inert scaffolding for a future persistence and auth layer. Declared so
/// both runtimes agree on the shapes; no endpoint serves them yet.
pub mod user;

pub use api::{ApiError, PaginatedResponse, PaginationMeta};
pub use health::HealthResponse;
pub use user::{AuthResponse, CreateUserRequest, LoginRequest, UpdateUserRequest, User};

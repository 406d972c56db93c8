use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
///
/// ## Fields
/// - `status`: String indicating service availability (always `"ok"` while
///   the process can answer)
/// - `timestamp`: RFC 3339 timestamp of the status check, millisecond
///   precision
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

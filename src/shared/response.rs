use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::timestamp::format_timestamp;

/// Envelope wrapped around every JSON body the API returns.
///
/// `data` is skipped entirely when absent, so error responses serialize to
/// just `{"success": false, "message": "..."}` rather than carrying a null
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Timestamped<T>>,
}

/// Payload plus the envelope's injected `timestamp`.
///
/// The payload's own fields are flattened into the same JSON object as the
/// timestamp, so payload types must not declare a `timestamp` field of
/// their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    #[serde(flatten)]
    pub inner: T,
    pub timestamp: String,
}

/// Builds an [`ApiResponse`], stamping `data` with the clock's current time
/// when it is present. The clock is not read at all for data-less
/// responses.
pub fn create_api_response<T>(
    success: bool,
    message: &str,
    data: Option<T>,
    clock: &impl Clock,
) -> ApiResponse<T> {
    ApiResponse {
        success,
        message: message.to_string(),
        data: data.map(|inner| Timestamped {
            inner,
            timestamp: format_timestamp(&clock.now()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::MockClock;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        x: i32,
    }

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .return_const(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        clock
    }

    #[test]
    fn test_success_response_injects_timestamp() {
        let response =
            create_api_response(true, "m", Some(Payload { x: 1 }), &fixed_clock());

        assert!(response.success);
        assert_eq!(response.message, "m");
        let data = response.data.unwrap();
        assert_eq!(data.inner, Payload { x: 1 });
        assert_eq!(data.timestamp, "2024-01-15 10:30:00 UTC");
    }

    #[test]
    fn test_payload_fields_are_flattened_next_to_timestamp() {
        let response =
            create_api_response(true, "m", Some(Payload { x: 1 }), &fixed_clock());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"]["x"], 1);
        assert_eq!(json["data"]["timestamp"], "2024-01-15 10:30:00 UTC");
        assert!(json["data"].get("inner").is_none());
    }

    #[test]
    fn test_error_response_omits_data_key() {
        let response = create_api_response(false, "m", None::<Payload>, &fixed_clock());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "m");
        // Absent, not null
        assert!(json.as_object().unwrap().get("data").is_none());
    }

    #[test]
    fn test_clock_is_untouched_without_data() {
        // MockClock panics on an unexpected call, so this passes only if
        // the data-less path never reads the clock.
        let response = create_api_response(false, "m", None::<Payload>, &MockClock::new());
        assert!(response.data.is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let response =
            create_api_response(true, "m", Some(Payload { x: 7 }), &fixed_clock());
        let raw = serde_json::to_string(&response).unwrap();
        let back: ApiResponse<Payload> = serde_json::from_str(&raw).unwrap();

        assert_eq!(back, response);
    }
}

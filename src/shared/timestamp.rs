use chrono::{DateTime, TimeZone, Utc};

/// Formats an instant as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// The input is converted to UTC first, so the rendered string is the same
/// no matter which timezone the caller's value carries. Sub-second
/// precision is dropped, never rounded.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use starter_api::shared::timestamp::format_timestamp;
///
/// let instant = DateTime::parse_from_rfc3339("2024-01-15T10:30:00.000Z").unwrap();
/// assert_eq!(format_timestamp(&instant), "2024-01-15 10:30:00 UTC");
/// ```
pub fn format_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

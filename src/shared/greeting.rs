use chrono::Timelike;

use super::clock::Clock;
use super::timestamp::format_timestamp;

/// Builds the time-of-day greeting for `name`.
///
/// Hours before 12 are "morning", before 18 "afternoon", the rest of the
/// day "evening". The bucket and the printed timestamp come from a single
/// clock read, both in UTC, so the sentence can never straddle an hour
/// boundary.
pub fn generate_greeting(name: &str, clock: &impl Clock) -> String {
    let now = clock.now();

    let time_of_day = match now.hour() {
        0..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };

    format!(
        "Good {}, {}! Current time: {}",
        time_of_day,
        name,
        format_timestamp(&now)
    )
}

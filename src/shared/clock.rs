use chrono::{DateTime, Utc};

/// Time source for the helpers in this module tree.
///
/// Every function that needs the current instant takes a `Clock` instead of
/// reading ambient time, so tests can pin the instant and assert exact
/// output strings.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Returns the current moment in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

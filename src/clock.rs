//! Clock abstraction for "today" reads.

use crate::date::CalendarDate;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current civil date.
///
/// The grid and selectability computations take plain dates; this trait is
/// the one seam where ambient time enters, so consumers and tests can
/// substitute a fixed date instead of reading the wall clock.
pub trait Clock {
    /// The current date, time of day already truncated.
    fn today(&self) -> CalendarDate;

    /// Whether `date` is the current date.
    fn is_today(&self, date: CalendarDate) -> bool {
        date == self.today()
    }
}

/// Clock backed by the system wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        // The conversion only fails past the year 9999
        CalendarDate::from_unix_seconds(seconds).unwrap_or(CalendarDate::GREGORIAN_START)
    }
}

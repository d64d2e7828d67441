mod clock;
mod consts;
mod date;
mod grid;
mod prelude;
mod types;

pub use clock::{Clock, SystemClock};
pub use consts::*;
pub use date::CalendarDate;
pub use grid::{GridDay, month_days, month_grid};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// Identifies a calendar month: a (year, month) pair with total order.
///
/// Ordering is chronological, and the rendered form (`YYYYMM`, fixed width)
/// sorts the same way as the values themselves, so identifiers can be
/// compared in either representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}{:02}", "year.get()", "month.get()")]
pub struct MonthId {
    year: Year,
    month: Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// The supported month navigation steps: one month or one year, either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthShift {
    /// One month back.
    PreviousMonth,
    /// One month forward.
    NextMonth,
    /// Twelve months back; the month number is unchanged.
    PreviousYear,
    /// Twelve months forward; the month number is unchanged.
    NextYear,
}

/// Error type for month shift requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShiftError {
    /// The offset is not one of the supported steps.
    #[error("unsupported month shift: {0} (must be 1, -1, 12 or -12)")]
    UnsupportedShift(i8),
}

impl MonthShift {
    /// The signed month offset this shift stands for.
    pub const fn months(self) -> i8 {
        match self {
            Self::PreviousMonth => -1,
            Self::NextMonth => 1,
            Self::PreviousYear => -12,
            Self::NextYear => 12,
        }
    }
}

impl TryFrom<i8> for MonthShift {
    type Error = ShiftError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::PreviousMonth),
            1 => Ok(Self::NextMonth),
            -12 => Ok(Self::PreviousYear),
            12 => Ok(Self::NextYear),
            other => Err(ShiftError::UnsupportedShift(other)),
        }
    }
}

impl MonthId {
    /// January 1753, the earliest month the calendar supports.
    pub const MIN: Self = Self {
        year: Year::GREGORIAN_START,
        month: Month::JANUARY,
    };

    /// Composes an identifier from already-validated components.
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the year component
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month component
    pub const fn month(self) -> Month {
        self.month
    }

    /// Shifts the month by the given step.
    ///
    /// A one-month step rolls over December/January boundaries; a one-year
    /// step changes the year only. A candidate that would land before
    /// [`MonthId::MIN`] (or outside the representable year range) leaves the
    /// month unchanged: navigation past the boundary is a silent no-op, not
    /// a clamp to the boundary.
    pub fn shift(self, shift: MonthShift) -> Self {
        let mut year = self.year.get();
        let mut month = self.month.get();
        match shift {
            MonthShift::NextMonth => {
                if month == DECEMBER {
                    month = JANUARY;
                    year += 1;
                } else {
                    month += 1;
                }
            }
            MonthShift::PreviousMonth => {
                if month == JANUARY {
                    month = DECEMBER;
                    year = year.saturating_sub(1);
                } else {
                    month -= 1;
                }
            }
            MonthShift::NextYear => year += 1,
            MonthShift::PreviousYear => year = year.saturating_sub(1),
        }

        match (Year::new(year), Month::new(month)) {
            (Ok(year), Ok(month)) => {
                let candidate = Self::new(year, month);
                if candidate >= Self::MIN { candidate } else { self }
            }
            _ => self,
        }
    }

    /// Formats the month for the picker header: `"<Month name>, <Year>"`,
    /// e.g. `"January, 1753"`.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.month.long_name(), self.year)
    }
}

impl From<CalendarDate> for MonthId {
    fn from(date: CalendarDate) -> Self {
        date.month_id()
    }
}

impl FromStr for MonthId {
    type Err = DateError;

    /// Parses the fixed-width `YYYYMM` form that `Display` produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        if trimmed.len() != 6 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Year::new(parse_u16(&trimmed[..4])?)?;
        let month = Month::new(parse_u8(&trimmed[4..])?)?;

        Ok(Self::new(year, month))
    }
}

impl serde::Serialize for MonthId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MonthId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Helper to parse u16 with better error messages
pub(crate) fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
pub(crate) fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

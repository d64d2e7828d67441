use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MIN_DAY, SECONDS_PER_DAY};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use crate::{DateError, MonthId, parse_u8, parse_u16};
use std::str::FromStr;

/// A civil date: year, month and day, with no time-of-day component.
///
/// Two dates are equal iff all three components are equal; there is no time
/// portion to ignore. Timestamp inputs go through [`from_unix_seconds`],
/// which discards the time-of-day remainder before the date is built.
///
/// Ordering is chronological. Dates before the supported calendar range are
/// representable (see [`is_selectable`]).
///
/// [`from_unix_seconds`]: CalendarDate::from_unix_seconds
/// [`is_selectable`]: CalendarDate::is_selectable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// 1753-01-01, the first day of the supported range.
    pub const GREGORIAN_START: Self = Self {
        year: Year::GREGORIAN_START,
        month: Month::JANUARY,
        day: Day::FIRST,
    };

    /// Creates a date from raw components, validating each.
    ///
    /// # Errors
    /// Returns `DateError` if the year, month or day is out of range
    /// (day validation accounts for month length and leap years).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// The first day of the given month.
    pub const fn first_of_month(month: MonthId) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            day: Day::FIRST,
        }
    }

    /// Builds a date from a Unix timestamp, truncating the time of day.
    ///
    /// The remainder of the day is discarded before conversion, so any two
    /// timestamps within the same civil day yield equal dates.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for timestamps past the
    /// representable year range (beyond 9999).
    pub fn from_unix_seconds(seconds: u64) -> Result<Self, DateError> {
        let (year, month, day) = civil_from_unix_days(seconds / SECONDS_PER_DAY);
        let year = u16::try_from(year).unwrap_or(u16::MAX);
        Self::new(year, month, day)
    }

    /// Returns the year component
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month component
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day component
    pub const fn day(self) -> Day {
        self.day
    }

    /// The identifier of the month this date falls in.
    pub const fn month_id(self) -> MonthId {
        MonthId::new(self.year, self.month)
    }

    /// Whether the date may be selected in the picker: its month must not
    /// precede [`MonthId::MIN`].
    pub fn is_selectable(self) -> bool {
        self.month_id() >= MonthId::MIN
    }

    /// The next calendar day, rolling over month and year boundaries.
    ///
    /// Returns `None` past the end of the representable range (9999-12-31).
    pub fn succ(self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day < days_in_month(year, month) {
            let day = Day::new(day + 1, year, month).ok()?;
            Some(Self { day, ..self })
        } else if month == DECEMBER {
            let year = Year::new(year + 1).ok()?;
            Some(Self {
                year,
                month: Month::JANUARY,
                day: Day::FIRST,
            })
        } else {
            let month = Month::new(month + 1).ok()?;
            Some(Self {
                month,
                day: Day::FIRST,
                ..self
            })
        }
    }

    /// The previous calendar day, rolling back over month and year
    /// boundaries.
    ///
    /// Returns `None` before the start of the representable range
    /// (0001-01-01).
    pub fn pred(self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day > MIN_DAY {
            let day = Day::new(day - 1, year, month).ok()?;
            Some(Self { day, ..self })
        } else if month == JANUARY {
            let year = year.checked_sub(1)?;
            let last = days_in_month(year, DECEMBER);
            Some(Self {
                year: Year::new(year).ok()?,
                month: Month::DECEMBER,
                day: Day::new(last, year, DECEMBER).ok()?,
            })
        } else {
            let last = days_in_month(year, month - 1);
            Some(Self {
                month: Month::new(month - 1).ok()?,
                day: Day::new(last, year, month - 1).ok()?,
                ..self
            })
        }
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses the ISO `YYYY-MM-DD` form that `Display` produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts days since 1970-01-01 to a civil `(year, month, day)` triple.
///
/// Era-based conversion over 400-year Gregorian cycles (146097 days each).
fn civil_from_unix_days(days: u64) -> (u64, u8, u8) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

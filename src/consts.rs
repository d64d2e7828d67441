/// Earliest supported year: the Gregorian calendar as adopted.
pub const MIN_YEAR: u16 = 1753;

/// Maximum representable year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Largest day number any month can have
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Long English month names (index 0 unused, months are 1-indexed)
pub(crate) const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Weeks shown in the display grid
pub const GRID_WEEK_COUNT: usize = 6;

/// Days per week
pub const DAYS_PER_WEEK: usize = 7;

/// Total cells in the display grid (6 weeks of 7 days)
pub const GRID_DAY_COUNT: usize = GRID_WEEK_COUNT * DAYS_PER_WEEK;

/// Component separator in the ISO date form (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Seconds per civil day, used when truncating timestamps
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

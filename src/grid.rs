//! Month display-grid generation.
//!
//! A month is rendered as 6 Monday-first weeks (42 cells): the whole target
//! month, preceded by days of the previous month and followed by days of
//! the next one. The leading count is never zero; a month that starts on
//! Monday takes a full week of previous-month days instead of none.

use crate::MonthId;
use crate::consts::GRID_DAY_COUNT;
use crate::date::CalendarDate;

/// Month offsets for Sakamoto's day-of-week method.
const SAKAMOTO_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// One cell of the display grid. Derived for rendering, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    /// The cell's date.
    pub date: CalendarDate,
    /// Day-of-month number, for the cell label.
    pub day: u8,
    /// Whether the cell is the injected "today".
    pub is_today: bool,
    /// Whether the date belongs to a month other than the displayed one.
    pub is_overflow: bool,
    /// Whether the date may be selected in the picker.
    pub is_selectable: bool,
}

/// The 42 consecutive dates displayed for the given month.
///
/// The sequence is strictly chronological with no gaps or duplicates, starts
/// on a Monday, and contains the whole target month as a contiguous run.
/// At the edges of the representable year range (January 0001, December
/// 9999) the grid is truncated rather than extended with dates that cannot
/// exist; every month from [`MonthId::MIN`] on is unaffected.
pub fn month_days(month: MonthId) -> Vec<CalendarDate> {
    let first = CalendarDate::first_of_month(month);

    let mut start = first;
    for _ in 0..leading_day_count(first) {
        match start.pred() {
            Some(prev) => start = prev,
            None => break,
        }
    }

    let mut days = Vec::with_capacity(GRID_DAY_COUNT);
    let mut cursor = Some(start);
    while days.len() < GRID_DAY_COUNT {
        let Some(date) = cursor else { break };
        days.push(date);
        cursor = date.succ();
    }
    days
}

/// Per-cell display records for the given month, with `today` injected by
/// the caller (see [`Clock::today`](crate::Clock::today)).
pub fn month_grid(month: MonthId, today: CalendarDate) -> Vec<GridDay> {
    month_days(month)
        .into_iter()
        .map(|date| GridDay {
            date,
            day: date.day().get(),
            is_today: date == today,
            is_overflow: date.month_id() != month,
            is_selectable: date.is_selectable(),
        })
        .collect()
}

/// How many previous-month days lead the grid, always `1..=7`.
///
/// The weekday of day 1 is re-based with Sunday last (Tue=2 .. Sat=6,
/// Sun=7), except that Monday maps to 8 rather than 1: a Monday-starting
/// month gets a full leading week, keeping the first in-month day off the
/// grid's first cell.
fn leading_day_count(first: CalendarDate) -> u8 {
    let offset = match weekday_sunday_indexed(first) {
        0 => 7,
        1 => 8,
        weekday => weekday,
    };
    offset - 1
}

/// Day of the week with Sunday indexed 0 through Saturday 6, by Sakamoto's
/// method. Exact for the whole Gregorian range handled here.
fn weekday_sunday_indexed(date: CalendarDate) -> u8 {
    let mut y = i32::from(date.year().get());
    let m = date.month().get() as usize;
    let d = i32::from(date.day().get());
    if m < 3 {
        y -= 1;
    }
    ((y + y / 4 - y / 100 + y / 400 + SAKAMOTO_OFFSETS[m - 1] + d) % 7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Month, Year, days_in_month};

    fn month_id(year: u16, month: u8) -> MonthId {
        MonthId::new(Year::new(year).unwrap(), Month::new(month).unwrap())
    }

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    const MONDAY: u8 = 1;

    #[test]
    fn test_weekday_known_dates() {
        // Jan 1 2024 was a Monday
        assert_eq!(weekday_sunday_indexed(date(2024, 1, 1)), 1);
        // Jan 1 1753 was a Monday
        assert_eq!(weekday_sunday_indexed(date(1753, 1, 1)), 1);
        // Feb 29 2000 was a Tuesday
        assert_eq!(weekday_sunday_indexed(date(2000, 2, 29)), 2);
        // Oct 1 2023 was a Sunday
        assert_eq!(weekday_sunday_indexed(date(2023, 10, 1)), 0);
        // Oct 1 2024 was a Tuesday
        assert_eq!(weekday_sunday_indexed(date(2024, 10, 1)), 2);
        // Dec 25 1752 was a Monday
        assert_eq!(weekday_sunday_indexed(date(1752, 12, 25)), 1);
    }

    #[test]
    fn test_weekday_advances_daily() {
        let mut d = date(2024, 1, 1);
        let mut expected = weekday_sunday_indexed(d);
        for _ in 0..400 {
            d = d.succ().unwrap();
            expected = (expected + 1) % 7;
            assert_eq!(weekday_sunday_indexed(d), expected, "at {d}");
        }
    }

    #[test]
    fn test_grid_is_42_consecutive_days() {
        for m in 1..=12 {
            let days = month_days(month_id(2024, m));
            assert_eq!(days.len(), GRID_DAY_COUNT, "month {m}");
            for pair in days.windows(2) {
                assert_eq!(pair[0].succ(), Some(pair[1]), "gap after {}", pair[0]);
            }
        }
    }

    #[test]
    fn test_grid_starts_on_monday() {
        for m in 1..=12 {
            let days = month_days(month_id(2025, m));
            assert_eq!(
                weekday_sunday_indexed(days[0]),
                MONDAY,
                "month {m} grid starts on {}",
                days[0]
            );
        }
    }

    #[test]
    fn test_grid_contains_whole_month_contiguously() {
        let id = month_id(2024, 2);
        let days = month_days(id);
        let in_month: Vec<_> = days.iter().filter(|d| d.month_id() == id).collect();
        assert_eq!(in_month.len(), usize::from(days_in_month(2024, 2)));
        assert_eq!(*in_month[0], date(2024, 2, 1));
        assert_eq!(*in_month[in_month.len() - 1], date(2024, 2, 29));

        // Contiguous: the in-month run has no overflow cells inside it
        let first_pos = days.iter().position(|d| d.month_id() == id).unwrap();
        for (i, d) in in_month.iter().enumerate() {
            assert_eq!(days[first_pos + i], **d);
        }
    }

    #[test]
    fn test_monday_starting_month_gets_full_leading_week() {
        // Jan 2024 starts on a Monday: seven days of Dec 2023 lead the grid
        let days = month_days(month_id(2024, 1));
        assert_eq!(days[0], date(2023, 12, 25));
        assert_eq!(days[6], date(2023, 12, 31));
        assert_eq!(days[7], date(2024, 1, 1));
        assert_eq!(days[41], date(2024, 2, 4));
    }

    #[test]
    fn test_sunday_starting_month_has_six_leading_days() {
        // Oct 2023 starts on a Sunday
        let days = month_days(month_id(2023, 10));
        assert_eq!(days[0], date(2023, 9, 25));
        assert_eq!(days[6], date(2023, 10, 1));
    }

    #[test]
    fn test_tuesday_starting_month_has_one_leading_day() {
        // Oct 2024 starts on a Tuesday
        let days = month_days(month_id(2024, 10));
        assert_eq!(days[0], date(2024, 9, 30));
        assert_eq!(days[1], date(2024, 10, 1));
        assert_eq!(days[41], date(2024, 11, 10));
    }

    #[test]
    fn test_min_month_grid() {
        // Jan 1 1753 was a Monday, so the full-leading-week rule applies
        let days = month_days(MonthId::MIN);
        assert_eq!(days.len(), GRID_DAY_COUNT);
        assert_eq!(days[0], date(1752, 12, 25));
        assert_eq!(days[7], date(1753, 1, 1));
        assert_eq!(days[41], date(1753, 2, 4));
    }

    #[test]
    fn test_february_non_leap_trailing_fill() {
        // Feb 2026 starts on a Sunday and has 28 days: 6 + 28 + 8 cells
        let days = month_days(month_id(2026, 2));
        assert_eq!(days[0], date(2026, 1, 26));
        assert_eq!(days[6], date(2026, 2, 1));
        assert_eq!(days[33], date(2026, 2, 28));
        assert_eq!(days[41], date(2026, 3, 8));
    }

    #[test]
    fn test_grid_flags_overflow_days() {
        let id = month_id(2024, 1);
        let grid = month_grid(id, date(2024, 1, 15));
        assert_eq!(grid.len(), GRID_DAY_COUNT);

        let overflow = grid.iter().filter(|cell| cell.is_overflow).count();
        assert_eq!(overflow, GRID_DAY_COUNT - 31);

        // Leading week belongs to December, trailing days to February
        assert!(grid[..7].iter().all(|cell| cell.is_overflow));
        assert!(grid[7..38].iter().all(|cell| !cell.is_overflow));
        assert!(grid[38..].iter().all(|cell| cell.is_overflow));
    }

    #[test]
    fn test_grid_marks_today_once() {
        let id = month_id(2024, 1);
        let today = date(2024, 1, 15);
        let grid = month_grid(id, today);

        let marked: Vec<_> = grid.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);
        assert_eq!(marked[0].day, 15);
    }

    #[test]
    fn test_grid_today_outside_month_is_unmarked() {
        let grid = month_grid(month_id(2024, 6), date(2024, 1, 15));
        assert!(grid.iter().all(|cell| !cell.is_today));
    }

    #[test]
    fn test_grid_today_on_overflow_cell_is_marked() {
        // Dec 31 2023 sits in Jan 2024's leading week
        let today = date(2023, 12, 31);
        let grid = month_grid(month_id(2024, 1), today);
        let cell = grid.iter().find(|cell| cell.is_today).unwrap();
        assert!(cell.is_overflow);
        assert_eq!(cell.date, today);
    }

    #[test]
    fn test_min_month_leading_days_are_not_selectable() {
        let grid = month_grid(MonthId::MIN, date(1753, 1, 1));
        // The December 1752 cells fall before the supported range
        assert!(grid[..7].iter().all(|cell| !cell.is_selectable));
        assert!(grid[7..].iter().all(|cell| cell.is_selectable));
    }

    #[test]
    fn test_day_numbers_match_dates() {
        let grid = month_grid(month_id(2024, 3), date(2024, 3, 10));
        for cell in &grid {
            assert_eq!(cell.day, cell.date.day().get());
        }
    }
}

//! Pure calendar-day arithmetic and month-grid construction.
//!
//! Everything here works on UTC-normalized calendar days: `today()` is the
//! single place the clock is read, and it always derives the day from
//! `Utc::now()`. Mixing local wall-clock days with the backend's stored UTC
//! dates is how entries shift by a day near midnight, so every comparison and
//! grouping in this crate goes through the same convention.
//!
//! Functions that depend on "now" take an explicit `today` reference date so
//! they stay pure and testable; callers pass `calendar::today()` at the edge.
//!
//! Failure semantics follow two tiers: display helpers (`format_display`,
//! `is_today`, `is_past`) degrade gracefully on malformed input, while
//! `days_between_iso` and `month_grid` fail with `AppError::InvalidDate`
//! because silently wrong arithmetic is worse than an error.

use crate::constants::{
    DATE_FORMAT_DISPLAY, DATE_FORMAT_ISO, DAYS_PER_WEEK, MONTHS_PER_YEAR, TIME_FORMAT_DISPLAY,
};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};
use std::collections::HashSet;

/// One cell of a month grid: either padding before/after the month's days,
/// or a real day with its display flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Leading or trailing padding that keeps every week exactly seven cells.
    Pad,
    /// A real day of the month.
    Day {
        /// Day of month, 1-based.
        day: u32,
        /// The day as a YYYY-MM-DD string.
        date: String,
        /// Whether a journal entry exists for this day.
        has_entry: bool,
        /// Whether this day is the reference "today".
        is_today: bool,
        /// Whether this day is the currently selected date.
        is_selected: bool,
    },
}

impl DayCell {
    /// True for real day cells, false for padding.
    pub fn is_day(&self) -> bool {
        matches!(self, DayCell::Day { .. })
    }
}

/// One month in the entry history, newest first in `enumerate_months` output.
///
/// `month` is 0-based (0 = January, 11 = December), matching the view layer's
/// indexing; chrono's 1-based months are converted at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 0-based (0–11).
    pub month: u32,
    /// English month name, e.g. "January".
    pub label: String,
}

/// Returns the current UTC-normalized calendar day.
///
/// This is the only function in the crate that reads the clock.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns today's date formatted as YYYY-MM-DD.
pub fn today_iso() -> String {
    to_iso(today())
}

/// Formats a calendar day as YYYY-MM-DD.
pub fn to_iso(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Parses a YYYY-MM-DD string into a calendar day.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` if the string is not a well-formed
/// calendar day.
pub fn parse_iso(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT_ISO)
        .map_err(|_| AppError::InvalidDate(date.to_string()))
}

/// Returns true iff `date` names the reference day.
///
/// Insensitive to time-of-day by construction: only YYYY-MM-DD strings are
/// considered. Malformed input degrades to `false`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::calendar;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// assert!(calendar::is_today("2026-08-27", today));
/// assert!(!calendar::is_today("2026-08-26", today));
/// assert!(!calendar::is_today("not a date", today));
/// ```
pub fn is_today(date: &str, today: NaiveDate) -> bool {
    parse_iso(date).map(|d| d == today).unwrap_or(false)
}

/// Returns true iff `date` is strictly before the reference day.
///
/// Malformed input degrades to `false`.
pub fn is_past(date: &str, today: NaiveDate) -> bool {
    parse_iso(date).map(|d| d < today).unwrap_or(false)
}

/// Absolute number of whole calendar days between two days.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (a - b).num_days().unsigned_abs()
}

/// Absolute number of whole calendar days between two YYYY-MM-DD strings.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` if either string is malformed; validate
/// with `models::is_valid_iso_date` first when a hard failure is undesired.
pub fn days_between_iso(a: &str, b: &str) -> AppResult<u64> {
    Ok(days_between(parse_iso(a)?, parse_iso(b)?))
}

/// Formats a date string for display, e.g. "Thursday, August 27, 2026".
///
/// Malformed input degrades to the input string unchanged rather than
/// failing, since this only ever feeds a label.
pub fn format_display(date: &str) -> String {
    match parse_iso(date) {
        Ok(d) => d.format(DATE_FORMAT_DISPLAY).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Formats a timestamp's clock time for display, e.g. "14:05", in the given
/// display offset.
///
/// Snippet rows show the user's wall-clock time, so this takes the display
/// offset explicitly instead of assuming UTC.
pub fn format_clock(ts: &DateTime<Utc>, display_offset: FixedOffset) -> String {
    ts.with_timezone(&display_offset)
        .format(TIME_FORMAT_DISPLAY)
        .to_string()
}

/// Builds the Monday-first week grid for one month.
///
/// Each week is exactly seven `DayCell`s; the first and last weeks are padded
/// with `DayCell::Pad` as needed (a month starting on Monday gets zero
/// leading pads, one starting on Sunday gets six). `month` is 0-based.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` if `year`/`month` do not name a real
/// month.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::calendar;
/// use std::collections::HashSet;
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// // February 2024 (month index 1), leap year
/// let weeks = calendar::month_grid(2024, 1, &HashSet::new(), None, today).unwrap();
/// let days: usize = weeks.iter().flatten().filter(|c| c.is_day()).count();
/// assert_eq!(days, 29);
/// assert!(weeks.iter().all(|w| w.len() == 7));
/// ```
pub fn month_grid(
    year: i32,
    month: u32,
    entry_days: &HashSet<NaiveDate>,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> AppResult<Vec<Vec<DayCell>>> {
    let first = first_of_month(year, month)?;

    // 0 = Monday .. 6 = Sunday, which doubles as the leading pad count.
    let leading = first.weekday().num_days_from_monday() as usize;
    let day_count = days_in_month(first) as usize;

    let mut cells: Vec<DayCell> = Vec::with_capacity(leading + day_count + DAYS_PER_WEEK);
    cells.resize(leading, DayCell::Pad);

    for day in 1..=day_count as u32 {
        // first_of_month already proved the month is real, so every day in
        // range is constructible.
        let date = first + Duration::days(i64::from(day) - 1);
        cells.push(DayCell::Day {
            day,
            date: to_iso(date),
            has_entry: entry_days.contains(&date),
            is_today: date == today,
            is_selected: selected == Some(date),
        });
    }

    let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    cells.resize(cells.len() + trailing, DayCell::Pad);

    Ok(cells
        .chunks(DAYS_PER_WEEK)
        .map(|week| week.to_vec())
        .collect())
}

/// Enumerates the months from the current month back to the month of the
/// earliest known entry, inclusive, most recent first.
///
/// With no entries (`earliest` is `None`) the history is empty.
pub fn enumerate_months(earliest: Option<NaiveDate>, today: NaiveDate) -> Vec<CalendarMonth> {
    let Some(earliest) = earliest else {
        return Vec::new();
    };
    if earliest > today {
        return Vec::new();
    }

    let mut months = Vec::new();
    let (mut year, mut month0) = (today.year(), today.month0());
    let stop = (earliest.year(), earliest.month0());

    loop {
        months.push(CalendarMonth {
            year,
            month: month0,
            label: month_label(month0),
        });
        if (year, month0) == stop {
            break;
        }
        if month0 == 0 {
            year -= 1;
            month0 = MONTHS_PER_YEAR - 1;
        } else {
            month0 -= 1;
        }
    }

    months
}

fn first_of_month(year: i32, month0: u32) -> AppResult<NaiveDate> {
    month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .ok_or_else(|| AppError::InvalidDate(format!("{}-{}", year, month0)))
}

fn days_in_month(first: NaiveDate) -> i64 {
    let next = if first.month() == MONTHS_PER_YEAR {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    // Every month has a successor month within NaiveDate's range here.
    (next.unwrap() - first).num_days()
}

fn month_label(month0: u32) -> String {
    // month0 is already validated or produced by chrono's month0().
    NaiveDate::from_ymd_opt(2000, month0 + 1, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

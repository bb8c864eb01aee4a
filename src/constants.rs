//! Constants used throughout the library.
//!
//! This module contains all constants used in the daybook library, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the library.
pub const APP_NAME: &str = "daybook";

// Configuration Keys & Environment Variables
/// Environment variable for the journal backend base URL.
pub const ENV_VAR_API_URL: &str = "DAYBOOK_API_URL";
/// Environment variable for the bearer token sent with backend requests.
pub const ENV_VAR_AUTH_TOKEN: &str = "DAYBOOK_AUTH_TOKEN";
/// Environment variable for the backend request timeout, in whole seconds.
pub const ENV_VAR_API_TIMEOUT: &str = "DAYBOOK_API_TIMEOUT";
/// Default backend base URL when `DAYBOOK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
/// Default backend request timeout in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Long human-readable date format, e.g. "Monday, January 5, 2026".
pub const DATE_FORMAT_DISPLAY: &str = "%A, %B %-d, %Y";
/// Clock format used for snippet timestamps, e.g. "14:05".
pub const TIME_FORMAT_DISPLAY: &str = "%H:%M";
/// Number of days in a calendar week (and cells per month-grid row).
pub const DAYS_PER_WEEK: usize = 7;
/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

// Sentiment Thresholds
/// Scores strictly above this are "Awesome".
pub const SENTIMENT_AWESOME_OVER: f64 = 0.5;
/// Scores strictly above this (and at most `SENTIMENT_AWESOME_OVER`) are "Good".
pub const SENTIMENT_GOOD_OVER: f64 = 0.2;
/// Scores strictly below this (and at least `SENTIMENT_BAD_UNDER`) are "Meh".
pub const SENTIMENT_MEH_UNDER: f64 = -0.2;
/// Scores strictly below this are "Bad".
pub const SENTIMENT_BAD_UNDER: f64 = -0.5;
/// Lowest valid sentiment score.
pub const SENTIMENT_SCORE_MIN: f64 = -1.0;
/// Highest valid sentiment score.
pub const SENTIMENT_SCORE_MAX: f64 = 1.0;

// Day Periods
/// Local hour at which Morning begins (inclusive).
pub const MORNING_START_HOUR: u32 = 5;
/// Local hour at which Afternoon begins (inclusive).
pub const AFTERNOON_START_HOUR: u32 = 12;
/// Local hour at which Evening begins (inclusive). Evening wraps past
/// midnight until `MORNING_START_HOUR`.
pub const EVENING_START_HOUR: u32 = 18;

// Entry Previews
/// Maximum number of lines included in a journal preview.
pub const PREVIEW_MAX_LINES: usize = 3;
/// Maximum number of characters included in a journal preview.
pub const PREVIEW_MAX_CHARS: usize = 120;
/// Suffix appended to truncated previews.
pub const PREVIEW_ELLIPSIS: char = '…';

// Mood Trend Windows
/// Number of days in the week trend view.
pub const TREND_WEEK_DAYS: u32 = 7;
/// Number of days in the month trend view.
pub const TREND_MONTH_DAYS: u32 = 30;

// Optimistic Snippet Reconciliation
/// Maximum clock skew, in seconds, between an optimistic local snippet and
/// the authoritative server record for the two to be considered the same.
pub const RECONCILE_WINDOW_SECS: i64 = 300;

//! Aggregation of raw entries and snippets into UI-ready structures.
//!
//! The view layer renders three shapes this module produces: a newest-first
//! entry list with month headers interleaved, a day's snippets sectioned
//! into Morning/Afternoon/Evening, and short multi-line previews of entry
//! text. It also owns the reconciliation step for optimistic snippet
//! inserts: a snippet shown immediately on submit is merged with the
//! authoritative record by content match once the next fetch returns,
//! never by its temporary client-side id.
//!
//! Everything here is a pure function over immutable inputs; callers may
//! re-invoke on every render.

use crate::constants::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR, PREVIEW_ELLIPSIS,
    PREVIEW_MAX_CHARS, PREVIEW_MAX_LINES, RECONCILE_WINDOW_SECS,
};
use crate::models::{JournalEntry, Snippet};
use chrono::{Datelike, FixedOffset, NaiveDate, Timelike};

/// One item of the flattened history list: a month header or an entry row.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalListItem {
    /// Section header introducing a month of entries.
    MonthHeader {
        /// Calendar year.
        year: i32,
        /// Month of year, 0-based (0–11), matching `calendar::CalendarMonth`.
        month: u32,
        /// English month name, e.g. "August".
        label: String,
    },
    /// A journal entry row.
    Entry(JournalEntry),
}

/// Flattens entries into a newest-first list with month headers.
///
/// A header is emitted whenever the month or year changes between
/// consecutive entries in sorted order, so every entry appears under exactly
/// one header. Empty input produces an empty list.
pub fn group_by_month(entries: &[JournalEntry]) -> Vec<JournalListItem> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut items = Vec::with_capacity(sorted.len());
    let mut current: Option<(i32, u32)> = None;

    for entry in sorted {
        let month_key = (entry.date.year(), entry.date.month0());
        if current != Some(month_key) {
            items.push(JournalListItem::MonthHeader {
                year: month_key.0,
                month: month_key.1,
                label: entry.date.format("%B").to_string(),
            });
            current = Some(month_key);
        }
        items.push(JournalListItem::Entry(entry.clone()));
    }

    items
}

/// A section of the day: morning, afternoon, or evening.
///
/// Evening wraps past midnight: the small hours before 5am belong to the
/// evening of the journaling day, not the morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Hours [5, 12).
    Morning,
    /// Hours [12, 18).
    Afternoon,
    /// Hours [18, 24) and [0, 5).
    Evening,
}

impl Period {
    /// Buckets an hour-of-day (0–23) into its period.
    ///
    /// # Examples
    ///
    /// ```
    /// use daybook::aggregate::Period;
    ///
    /// assert_eq!(Period::of_hour(11), Period::Morning);
    /// assert_eq!(Period::of_hour(12), Period::Afternoon);
    /// assert_eq!(Period::of_hour(23), Period::Evening);
    /// assert_eq!(Period::of_hour(4), Period::Evening);
    /// ```
    pub fn of_hour(hour: u32) -> Self {
        if (MORNING_START_HOUR..AFTERNOON_START_HOUR).contains(&hour) {
            Period::Morning
        } else if (AFTERNOON_START_HOUR..EVENING_START_HOUR).contains(&hour) {
            Period::Afternoon
        } else {
            Period::Evening
        }
    }

    /// Display label for the section header.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
        }
    }
}

/// One rendered section of a day's snippet list.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSection {
    /// Which part of the day this section covers.
    pub period: Period,
    /// The section's snippets, ascending by creation time.
    pub items: Vec<Snippet>,
}

/// Sections a day's snippets into Morning/Afternoon/Evening.
///
/// The hour is taken in the given display offset (the device's zone at
/// render time); this is the one deliberate departure from UTC days, since
/// "morning" is a statement about the user's clock, not the server's.
/// Sections with no snippets are omitted; within a section snippets sort
/// ascending by creation time.
pub fn group_snippets_by_period(snippets: &[Snippet], display_offset: FixedOffset) -> Vec<PeriodSection> {
    let mut ordered: Vec<&Snippet> = snippets.iter().collect();
    ordered.sort_by_key(|s| s.created_at);

    let mut sections: Vec<PeriodSection> = Vec::with_capacity(3);
    for period in [Period::Morning, Period::Afternoon, Period::Evening] {
        let items: Vec<Snippet> = ordered
            .iter()
            .filter(|s| {
                Period::of_hour(s.created_at.with_timezone(&display_offset).hour()) == period
            })
            .map(|s| (*s).clone())
            .collect();
        if !items.is_empty() {
            sections.push(PeriodSection { period, items });
        }
    }

    sections
}

/// Builds a short preview of an entry's text with the default limits
/// (3 lines, 120 characters).
pub fn preview(text: &str) -> String {
    preview_with(text, PREVIEW_MAX_LINES, PREVIEW_MAX_CHARS)
}

/// Builds a short preview of an entry's text.
///
/// Takes the first `max_lines` newline-delimited lines. If the result
/// exceeds `max_chars` characters it is cut there and an ellipsis appended;
/// otherwise, if the line limit was reached (so more content may follow),
/// only the ellipsis is appended. Shorter text passes through unchanged.
///
/// # Examples
///
/// ```
/// use daybook::aggregate::preview_with;
///
/// assert_eq!(
///     preview_with("line1\nline2\nline3\nline4", 3, 120),
///     "line1\nline2\nline3…"
/// );
/// assert_eq!(preview_with("just one line", 3, 120), "just one line");
/// ```
pub fn preview_with(text: &str, max_lines: usize, max_chars: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text.split('\n').take(max_lines).collect();
    let joined = lines.join("\n");

    if joined.chars().count() > max_chars {
        let cut: String = joined.chars().take(max_chars).collect();
        let mut out = cut.trim_end().to_string();
        out.push(PREVIEW_ELLIPSIS);
        out
    } else if lines.len() == max_lines {
        let mut out = joined;
        out.push(PREVIEW_ELLIPSIS);
        out
    } else {
        joined
    }
}

/// Returns the snippets sorted newest first.
pub fn sorted_newest_first(snippets: &[Snippet]) -> Vec<Snippet> {
    let mut sorted = snippets.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// The earliest entry date in a set, if any; feeds `calendar::enumerate_months`.
pub fn earliest_entry_date(entries: &[JournalEntry]) -> Option<NaiveDate> {
    entries.iter().map(|e| e.date).min()
}

/// Merges optimistically-inserted local snippets with the authoritative
/// server list.
///
/// A local snippet is considered confirmed (and dropped in favor of the
/// server record) when a server snippet has the same trimmed text and a
/// creation time within `RECONCILE_WINDOW_SECS`. Unconfirmed local snippets
/// are kept so the UI never loses what the user just typed. The result is
/// ascending by creation time.
///
/// Matching is by content, not id: the temporary client-side id is exactly
/// the thing the server replaces.
pub fn reconcile_snippets(local: &[Snippet], server: &[Snippet]) -> Vec<Snippet> {
    let mut merged: Vec<Snippet> = server.to_vec();
    for pending in local {
        let confirmed = server.iter().any(|s| {
            s.entry.trim() == pending.entry.trim()
                && (s.created_at - pending.created_at).num_seconds().abs() <= RECONCILE_WINDOW_SECS
        });
        if !confirmed {
            merged.push(pending.clone());
        }
    }

    merged.sort_by_key(|s| s.created_at);
    merged
}

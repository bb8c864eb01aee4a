//! Domain types shared between the backend client and the view-model builders.
//!
//! These mirror the backend's wire shapes directly: a `JournalEntry` is the
//! AI-aggregated, sentiment-scored summary of one calendar day, and a
//! `Snippet` is a single timestamped note the user jotted down during the
//! day. Both are read-mostly: the backend owns their lifecycle, and every
//! function in this crate treats them as immutable inputs.

use crate::constants;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's AI-generated journal summary.
///
/// There is at most one entry per user per calendar day. The sentiment score,
/// when present, is in [-1, 1]; it is absent for entries the backend has not
/// scored yet.
///
/// # Examples
///
/// ```
/// use daybook::models::JournalEntry;
///
/// let json = r#"{
///     "id": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8",
///     "user_id": "00000000-0000-0000-0000-000000000001",
///     "date": "2026-08-27",
///     "entry": "Slow morning, good afternoon walk.",
///     "sentiment_score": 0.4
/// }"#;
/// let entry: JournalEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.sentiment_score, Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Backend-assigned identifier.
    pub id: Uuid,
    /// Owner of the entry.
    pub user_id: Uuid,
    /// The calendar day this entry summarizes (UTC-normalized, unique per user).
    pub date: NaiveDate,
    /// The AI-generated summary text.
    pub entry: String,
    /// Sentiment of the day in [-1, 1], if the backend has scored it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}

/// A single raw journaling note, immutable once created.
///
/// Many snippets map to at most one `JournalEntry` per day; the backend
/// aggregates them into the daily summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Backend-assigned identifier (client-generated for optimistic inserts
    /// until the authoritative record replaces it).
    pub id: Uuid,
    /// Owner of the snippet.
    pub user_id: Uuid,
    /// The snippet text.
    pub entry: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    /// The UTC calendar day this snippet belongs to.
    ///
    /// Uses the same UTC-normalized convention as `JournalEntry::date` so
    /// that grouping snippets and matching them against entries can never
    /// drift by a day.
    pub fn utc_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Returns true if `text` is acceptable snippet or journal content.
///
/// Whitespace-only text is rejected; everything else is allowed.
pub fn is_valid_entry_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Returns true if `date` is a well-formed YYYY-MM-DD calendar day.
///
/// Stricter than a plain parse: the string must be exactly the zero-padded
/// ten-character form the backend stores.
///
/// # Examples
///
/// ```
/// use daybook::models::is_valid_iso_date;
///
/// assert!(is_valid_iso_date("2026-08-27"));
/// assert!(!is_valid_iso_date("2026-8-27"));
/// assert!(!is_valid_iso_date("2026-02-30"));
/// ```
pub fn is_valid_iso_date(date: &str) -> bool {
    date.len() == 10
        && NaiveDate::parse_from_str(date, constants::DATE_FORMAT_ISO).is_ok()
}

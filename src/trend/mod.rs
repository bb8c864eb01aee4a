//! Mood-trend series construction for the dashboard graph.
//!
//! The graph plots one point per calendar day over a fixed window ending
//! today (7 days for the week view, 30 for the month view), with the
//! sentiment bucket's 0–4 ordinal on the y-axis. Days without a scored
//! entry produce a gap rather than a fabricated value.

use crate::constants::{TREND_MONTH_DAYS, TREND_WEEK_DAYS};
use crate::models::JournalEntry;
use crate::sentiment::SentimentBucket;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// One day on the mood graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// The calendar day this point represents.
    pub date: NaiveDate,
    /// The day's raw sentiment score, if an entry exists and was scored.
    pub score: Option<f64>,
    /// The day's mood bucket (y-axis ordinal via `SentimentBucket::y_axis`),
    /// absent when there is no scored entry.
    pub bucket: Option<SentimentBucket>,
}

/// Builds the mood series for the last `days` calendar days ending today,
/// ascending by date.
///
/// Each day gets exactly one point. Unscored or missing entries yield
/// `None` for both score and bucket, which the graph renders as a gap.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::trend::build_trend;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// let series = build_trend(&[], 7, today);
/// assert_eq!(series.len(), 7);
/// assert_eq!(series.last().unwrap().date, today);
/// assert!(series.iter().all(|p| p.bucket.is_none()));
/// ```
pub fn build_trend(entries: &[JournalEntry], days: u32, today: NaiveDate) -> Vec<TrendPoint> {
    let by_date: HashMap<NaiveDate, &JournalEntry> =
        entries.iter().map(|e| (e.date, e)).collect();

    (0..days)
        .rev()
        .map(|back| {
            let date = today - Duration::days(i64::from(back));
            let score = by_date.get(&date).and_then(|e| e.sentiment_score);
            TrendPoint {
                date,
                score,
                bucket: SentimentBucket::from_score(score),
            }
        })
        .collect()
}

/// The week view: last 7 days ending today.
pub fn week_trend(entries: &[JournalEntry], today: NaiveDate) -> Vec<TrendPoint> {
    build_trend(entries, TREND_WEEK_DAYS, today)
}

/// The month view: last 30 days ending today.
pub fn month_trend(entries: &[JournalEntry], today: NaiveDate) -> Vec<TrendPoint> {
    build_trend(entries, TREND_MONTH_DAYS, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(date: &str, score: Option<f64>) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: date.parse().unwrap(),
            entry: "day".to_string(),
            sentiment_score: score,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_trend_shape() {
        let today = d(2026, 8, 27);
        let series = week_trend(&[], today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, d(2026, 8, 21));
        assert_eq!(series[6].date, today);
    }

    #[test]
    fn test_month_trend_shape() {
        let today = d(2026, 8, 27);
        let series = month_trend(&[], today);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, d(2026, 7, 29));
    }

    #[test]
    fn test_scored_days_get_buckets() {
        let today = d(2026, 8, 27);
        let entries = vec![
            entry("2026-08-27", Some(0.7)),
            entry("2026-08-26", Some(-0.3)),
            entry("2026-08-25", None), // unscored entry still counts as a gap
        ];
        let series = week_trend(&entries, today);

        assert_eq!(series[6].bucket, Some(SentimentBucket::Awesome));
        assert_eq!(series[5].bucket, Some(SentimentBucket::Meh));
        assert_eq!(series[4].bucket, None);
        assert_eq!(series[4].score, None);
        assert_eq!(series[3].bucket, None);
    }

    #[test]
    fn test_entries_outside_window_ignored() {
        let today = d(2026, 8, 27);
        let entries = vec![entry("2026-08-01", Some(0.9))];
        let series = week_trend(&entries, today);
        assert!(series.iter().all(|p| p.bucket.is_none()));
    }
}

//! End-to-end view-model tests: backend JSON in, render-ready structures out.
//!
//! These exercise the whole pure pipeline the app runs on every screen
//! refresh, using fixed reference dates so results are deterministic.

use chrono::NaiveDate;
use daybook::aggregate::{self, JournalListItem};
use daybook::models::JournalEntry;
use daybook::sentiment::SentimentBucket;
use daybook::{calendar, streak, trend};
use std::collections::HashSet;

fn fixture_entries() -> Vec<JournalEntry> {
    serde_json::from_str(
        r#"[
        {
            "id": "00000000-0000-0000-0000-00000000000a",
            "user_id": "00000000-0000-0000-0000-000000000001",
            "date": "2026-08-27",
            "entry": "Long walk in the park.\nCooked dinner with friends.\nRead before bed.\nSlept early.",
            "sentiment_score": 0.6
        },
        {
            "id": "00000000-0000-0000-0000-00000000000b",
            "user_id": "00000000-0000-0000-0000-000000000001",
            "date": "2026-08-26",
            "entry": "Busy workday, nothing special.",
            "sentiment_score": 0.0
        },
        {
            "id": "00000000-0000-0000-0000-00000000000c",
            "user_id": "00000000-0000-0000-0000-000000000001",
            "date": "2026-07-14",
            "entry": "Rough day.",
            "sentiment_score": -0.7
        }
    ]"#,
    )
    .unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
}

#[test]
fn history_screen_pipeline() {
    let entries = fixture_entries();

    // Month-grouped list: every entry under exactly one header, newest first.
    let items = aggregate::group_by_month(&entries);
    let mut seen_dates = Vec::new();
    let mut current_header: Option<(i32, u32)> = None;
    for item in &items {
        match item {
            JournalListItem::MonthHeader { year, month, .. } => {
                current_header = Some((*year, *month));
            }
            JournalListItem::Entry(e) => {
                let header = current_header.expect("entry must follow a header");
                assert_eq!(
                    header,
                    (
                        chrono::Datelike::year(&e.date),
                        chrono::Datelike::month0(&e.date)
                    )
                );
                seen_dates.push(e.date);
            }
        }
    }
    assert_eq!(seen_dates.len(), entries.len());

    // Month history for the calendar pager: August back to July.
    let months = calendar::enumerate_months(aggregate::earliest_entry_date(&entries), today());
    let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["August", "July"]);

    // Previews: the four-line entry is cut to three lines with an ellipsis.
    let preview = aggregate::preview(&entries[0].entry);
    assert_eq!(
        preview,
        "Long walk in the park.\nCooked dinner with friends.\nRead before bed.…"
    );
    assert_eq!(aggregate::preview(&entries[1].entry), entries[1].entry);
}

#[test]
fn calendar_screen_pipeline() {
    let entries = fixture_entries();
    let entry_days: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let weeks = calendar::month_grid(2026, 7, &entry_days, Some(today()), today()).unwrap();

    // August 2026 has 31 days; each week is a full row of seven cells.
    assert!(weeks.iter().all(|w| w.len() == 7));
    let day_cells: Vec<_> = weeks.iter().flatten().filter(|c| c.is_day()).collect();
    assert_eq!(day_cells.len(), 31);

    let marked: Vec<&str> = weeks
        .iter()
        .flatten()
        .filter_map(|c| match c {
            daybook::DayCell::Day {
                date, has_entry, ..
            } if *has_entry => Some(date.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(marked, vec!["2026-08-26", "2026-08-27"]);

    // The indicator dot color comes from the day's sentiment bucket.
    let bucket = SentimentBucket::from_score(entries[0].sentiment_score).unwrap();
    assert_eq!(bucket, SentimentBucket::Awesome);
    assert_eq!(bucket.bg_color(), "#4CAF50");
}

#[test]
fn dashboard_screen_pipeline() {
    let entries = fixture_entries();
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();

    // Two-day streak ending today; the July entry does not extend it.
    let stats = streak::compute_stats(&dates, today());
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.current_streak, 2);

    // Week trend: gaps for the five unscored days, buckets for the rest.
    let series = trend::week_trend(&entries, today());
    assert_eq!(series.len(), 7);
    assert_eq!(series[6].bucket, Some(SentimentBucket::Awesome));
    assert_eq!(series[5].bucket, Some(SentimentBucket::Neutral));
    assert!(series[..5].iter().all(|p| p.bucket.is_none()));
}

#[test]
fn pure_functions_tolerate_empty_inputs() {
    let today = today();
    assert!(aggregate::group_by_month(&[]).is_empty());
    assert!(calendar::enumerate_months(None, today).is_empty());
    assert_eq!(streak::compute_stats(&[], today), streak::JournalStats::default());
    assert_eq!(aggregate::preview(""), "");
    assert_eq!(trend::week_trend(&[], today).len(), 7);
    assert_eq!(SentimentBucket::from_score(None), None);
}

//! Entry-count and consecutive-day streak statistics.
//!
//! The streak policy is strict: a non-zero current streak requires an entry
//! dated today. Without one the streak is 0 no matter how long yesterday's
//! run was. Dates use the same UTC-normalized calendar convention as the
//! rest of the crate; a local-wall-clock day sneaking in here is exactly the
//! off-by-one bug the convention exists to prevent.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Aggregate statistics over a user's journal history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JournalStats {
    /// Count of distinct days with an entry.
    pub total_entries: usize,
    /// Length of the unbroken run of daily entries ending today; 0 when
    /// today has no entry.
    pub current_streak: u32,
}

/// Computes entry-count and streak statistics from a set of entry dates.
///
/// Duplicate dates are counted once. The input need not be sorted.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use daybook::streak::compute_stats;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// let dates = vec![today, today - Duration::days(1), today - Duration::days(2)];
/// let stats = compute_stats(&dates, today);
/// assert_eq!(stats.total_entries, 3);
/// assert_eq!(stats.current_streak, 3);
/// ```
pub fn compute_stats(entry_dates: &[NaiveDate], today: NaiveDate) -> JournalStats {
    let days: BTreeSet<NaiveDate> = entry_dates.iter().copied().collect();

    let mut current_streak = 0;
    let mut cursor = today;
    while days.contains(&cursor) {
        current_streak += 1;
        cursor -= Duration::days(1);
    }

    JournalStats {
        total_entries: days.len(),
        current_streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[], d(2026, 8, 27));
        assert_eq!(stats, JournalStats::default());
    }

    #[test]
    fn test_single_entry_today() {
        let today = d(2026, 8, 27);
        let stats = compute_stats(&[today], today);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_unbroken_run_ending_today() {
        let today = d(2026, 8, 27);
        let dates = [today, d(2026, 8, 26), d(2026, 8, 25)];
        let stats = compute_stats(&dates, today);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_no_entry_today_means_zero_streak() {
        // Strict policy: yesterday's run does not count without today.
        let today = d(2026, 8, 27);
        let dates = [d(2026, 8, 26), d(2026, 8, 25), d(2026, 8, 24)];
        let stats = compute_stats(&dates, today);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let today = d(2026, 8, 27);
        let dates = [today, d(2026, 8, 26), d(2026, 8, 24), d(2026, 8, 23)];
        let stats = compute_stats(&dates, today);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_duplicate_dates_count_once() {
        let today = d(2026, 8, 27);
        let dates = [today, today, d(2026, 8, 26), d(2026, 8, 26)];
        let stats = compute_stats(&dates, today);
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let today = d(2026, 3, 1);
        let dates = [today, d(2026, 2, 28), d(2026, 2, 27)];
        let stats = compute_stats(&dates, today);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_streak_bounded_by_distinct_days() {
        let today = d(2026, 8, 27);
        let dates: Vec<NaiveDate> = (0..10).map(|i| today - Duration::days(i)).collect();
        let stats = compute_stats(&dates, today);
        assert!(stats.current_streak as usize <= stats.total_entries);
        assert_eq!(stats.current_streak, 10);
    }
}

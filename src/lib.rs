/*!
# Daybook

Daybook is the data-transformation core of a snippet-based journaling app:
users jot short snippets through the day, a backend LLM call condenses them
into a daily journal summary with a sentiment score, and this crate turns the
backend's records into the view models the app renders.

## Core Features

- UTC-normalized calendar arithmetic, month grids, and month history
- Sentiment score classification into discrete mood buckets
- Entry-count and consecutive-day streak statistics
- Month-grouped entry lists, day-period snippet sections, and previews
- Mood-trend series for the 7-day and 30-day graph views
- A typed client for the backend's journal and snippet REST contracts

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `models`: Backend wire types and input validation
- `calendar`, `sentiment`, `streak`, `aggregate`, `trend`: pure view-model
  builders with no internal state, safe to call on every render
- `api`: the backend REST client

## Usage Example

```rust,no_run
use daybook::{aggregate, calendar, streak, ApiClient, Config};
use uuid::Uuid;

fn main() -> daybook::AppResult<()> {
    let config = Config::load()?;
    let api = ApiClient::new(&config)?;

    let user_id = Uuid::new_v4();
    let entries = api.get_journals(user_id)?;

    let today = calendar::today();
    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    let stats = streak::compute_stats(&dates, today);
    println!("{} entries, {}-day streak", stats.total_entries, stats.current_streak);

    for item in aggregate::group_by_month(&entries) {
        println!("{:?}", item);
    }
    Ok(())
}
```
*/

/// Aggregation of entries and snippets into UI-ready lists and previews
pub mod aggregate;
/// HTTP client for the journal backend
pub mod api;
/// Pure calendar-day arithmetic and month-grid construction
pub mod calendar;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the library
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Backend wire types and input validation
pub mod models;
/// Sentiment score classification and mood display constants
pub mod sentiment;
/// Entry-count and streak statistics
pub mod streak;
/// Mood-trend series for the dashboard graph
pub mod trend;

// Re-export important types for convenience
pub use api::ApiClient;
pub use calendar::{CalendarMonth, DayCell};
pub use config::Config;
pub use errors::{ApiError, AppError, AppResult};
pub use models::{JournalEntry, Snippet};
pub use sentiment::SentimentBucket;
pub use streak::JournalStats;

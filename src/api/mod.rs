//! HTTP client for the journal backend.
//!
//! This module provides a typed client for the backend REST API: fetching
//! journal entries and snippets, creating snippets, and triggering the
//! snippet-to-journal summary generation. The backend owns all persistence
//! and the LLM call; this client only speaks the request/response contracts.

use crate::calendar;
use crate::config::Config;
use crate::errors::{ApiError, AppError, AppResult};
use crate::models::{is_valid_entry_text, JournalEntry, Snippet};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Request body for creating a snippet.
#[derive(Debug, Serialize)]
struct NewSnippetRequest<'a> {
    entry: &'a str,
    user_id: Uuid,
}

/// Request body for creating or overwriting a day's journal entry.
#[derive(Debug, Serialize)]
struct UpsertJournalRequest<'a> {
    entry: &'a str,
    date: NaiveDate,
    user_id: Uuid,
}

/// Client for the journal backend API.
///
/// Cheap to clone is not a goal here; construct once from `Config` and share
/// by reference. All methods are synchronous and side-effect free on the
/// client itself.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the auth token is not a valid header
    /// value or the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| AppError::Config("auth token is not a valid header value".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    /// Fetches all journal entries for a user, as stored (no ordering
    /// guarantee; run the result through `aggregate::group_by_month` for
    /// display).
    pub fn get_journals(&self, user_id: Uuid) -> AppResult<Vec<JournalEntry>> {
        let url = format!("{}/journals/{}", self.base_url, user_id);
        debug!(%user_id, "Fetching journals");
        self.get_json(&url)
    }

    /// Fetches the journal entry for one calendar day, or `None` if the day
    /// has no entry yet.
    pub fn get_journal_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<JournalEntry>> {
        let url = format!(
            "{}/journals/{}/{}",
            self.base_url,
            user_id,
            calendar::to_iso(date)
        );
        debug!(%user_id, date = %date, "Fetching journal by date");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ApiError::Unreachable)?;

        // Absence is a normal answer here, whether the backend says so with
        // a 404 or a null body.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(status_error(response).into());
        }

        response
            .json::<Option<JournalEntry>>()
            .map_err(|e| ApiError::InvalidResponse(format!("journal entry: {}", e)).into())
    }

    /// Creates or overwrites the journal entry for a day.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidEntry` without making a request when the
    /// text is blank.
    pub fn create_or_update_journal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        entry: &str,
    ) -> AppResult<JournalEntry> {
        require_text(entry)?;
        let url = format!("{}/journals", self.base_url);
        debug!(%user_id, date = %date, "Upserting journal entry");
        self.post_json(
            &url,
            &UpsertJournalRequest {
                entry,
                date,
                user_id,
            },
        )
    }

    /// Fetches all snippets for a user.
    pub fn get_snippets(&self, user_id: Uuid) -> AppResult<Vec<Snippet>> {
        let url = format!("{}/snippets/{}", self.base_url, user_id);
        debug!(%user_id, "Fetching snippets");
        self.get_json(&url)
    }

    /// Fetches the snippets belonging to one UTC calendar day, ascending by
    /// creation time.
    ///
    /// The backend has no by-date snippet endpoint; filtering happens client
    /// side over the full list, using the same UTC day convention as entry
    /// dates.
    pub fn get_snippets_on(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<Snippet>> {
        let mut snippets: Vec<Snippet> = self
            .get_snippets(user_id)?
            .into_iter()
            .filter(|s| s.utc_date() == date)
            .collect();
        snippets.sort_by_key(|s| s.created_at);
        Ok(snippets)
    }

    /// Creates a snippet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidEntry` without making a request when the
    /// text is blank.
    pub fn create_snippet(&self, user_id: Uuid, entry: &str) -> AppResult<Snippet> {
        require_text(entry)?;
        let url = format!("{}/snippets", self.base_url);
        debug!(%user_id, "Creating snippet");
        self.post_json(&url, &NewSnippetRequest { entry, user_id })
    }

    /// Creates a snippet and asks the backend to regenerate the day's
    /// AI journal summary in the same call, returning the fresh entry.
    pub fn create_snippet_with_summary(
        &self,
        user_id: Uuid,
        entry: &str,
    ) -> AppResult<JournalEntry> {
        require_text(entry)?;
        let url = format!("{}/snippets/with-summary", self.base_url);
        debug!(%user_id, "Creating snippet with summary generation");
        self.post_json(&url, &NewSnippetRequest { entry, user_id })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(ApiError::Unreachable)?;

        if !response.status().is_success() {
            return Err(status_error(response).into());
        }

        response
            .json::<T>()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(ApiError::Unreachable)?;

        if !response.status().is_success() {
            return Err(status_error(response).into());
        }

        response
            .json::<T>()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }
}

fn require_text(entry: &str) -> AppResult<()> {
    if is_valid_entry_text(entry) {
        Ok(())
    } else {
        Err(AppError::InvalidEntry(
            "snippet or journal text must not be blank".to_string(),
        ))
    }
}

fn status_error(response: reqwest::blocking::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response.text().unwrap_or_default();
    ApiError::Status { status, message }
}

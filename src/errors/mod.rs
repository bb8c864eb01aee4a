//! Error handling utilities for the daybook library.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the library, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Most malformed input does not surface here at all: display-oriented helpers
//! degrade to empty or pass-through values instead of failing (see the module
//! docs for `calendar` and `aggregate`). The variants below cover the cases
//! where a caller explicitly asked for hard failure, plus the backend client.

use thiserror::Error;

/// Represents specific error cases that can occur when talking to the journal backend.
///
/// This enum provides detailed, contextual error information for different failure
/// modes of the REST client. Each variant captures relevant information such as
/// the HTTP status and underlying transport errors.
///
/// # Examples
///
/// ```
/// use daybook::errors::ApiError;
///
/// let error = ApiError::Status {
///     status: 500,
///     message: "internal server error".to_string(),
/// };
/// assert!(format!("{}", error).contains("500"));
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached at all (DNS, connect, or timeout failure).
    #[error("Journal backend unreachable: {0}. Check DAYBOOK_API_URL and that the backend is running.")]
    Unreachable(#[source] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("Journal backend returned HTTP {status}: {message}")]
    Status {
        /// The HTTP status code returned by the backend
        status: u16,
        /// The response body, if any
        message: String,
    },

    /// The backend answered with a body that could not be decoded.
    #[error("Invalid response from journal backend: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the daybook library.
///
/// This enum is the central error type used across the library, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a date error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::InvalidDate("2024-13-99".to_string());
/// assert!(format!("{}", error).contains("2024-13-99"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date string that could not be parsed as a YYYY-MM-DD calendar day.
    ///
    /// Only returned by functions documented to fail hard on bad dates
    /// (`days_between_iso`, `month_grid`); display helpers degrade instead.
    #[error("Invalid date: '{0}' is not a valid YYYY-MM-DD calendar day")]
    InvalidDate(String),

    /// A sentiment score outside the [-1, 1] range, from the validating path.
    ///
    /// The display path (`SentimentBucket::classify`) clamps instead of
    /// returning this; use `sentiment::validate_score` to get hard failure.
    #[error("Invalid sentiment score: {0} is outside the [-1, 1] range")]
    InvalidScore(f64),

    /// Blank snippet or journal text submitted to a write operation.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Errors from the backend REST client.
    ///
    /// This variant uses a dedicated ApiError type to provide detailed
    /// information about what went wrong with the HTTP interaction.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let error = AppError::InvalidDate("not-a-date".to_string());
        let message = format!("{}", error);
        assert!(message.contains("not-a-date"));
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_invalid_score_display() {
        let error = AppError::InvalidScore(1.5);
        assert!(format!("{}", error).contains("1.5"));
    }

    #[test]
    fn test_api_error_converts_to_app_error() {
        let api_error = ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        let app_error: AppError = api_error.into();
        match app_error {
            AppError::Api(ApiError::Status { status, .. }) => assert_eq!(status, 404),
            _ => panic!("Expected Api variant"),
        }
    }
}

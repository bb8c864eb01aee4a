//! Sentiment score classification and mood display constants.
//!
//! A day's journal entry carries an optional sentiment score in [-1, 1];
//! this module maps it onto five discrete mood buckets, each with a fixed
//! label, emoji, and foreground/background color pair. The thresholds are
//! the product's, not derived:
//!
//! - score > 0.5: Awesome
//! - 0.2 < score <= 0.5: Good
//! - -0.2 <= score <= 0.2: Neutral
//! - -0.5 <= score < -0.2: Meh
//! - score < -0.5: Bad
//!
//! An absent score classifies to nothing at all (no badge is rendered).
//! Out-of-range scores are clamped into [-1, 1] so display paths never fail;
//! `validate_score` is the hard-failing alternative for write paths.

use crate::constants::{
    SENTIMENT_AWESOME_OVER, SENTIMENT_BAD_UNDER, SENTIMENT_GOOD_OVER, SENTIMENT_MEH_UNDER,
    SENTIMENT_SCORE_MAX, SENTIMENT_SCORE_MIN,
};
use crate::errors::{AppError, AppResult};

/// A discrete mood bucket derived from a sentiment score.
///
/// # Examples
///
/// ```
/// use daybook::sentiment::SentimentBucket;
///
/// assert_eq!(SentimentBucket::classify(0.6), SentimentBucket::Awesome);
/// assert_eq!(SentimentBucket::classify(0.2), SentimentBucket::Neutral);
/// assert_eq!(SentimentBucket::classify(-0.6).label(), "Bad");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentBucket {
    /// score > 0.5
    Awesome,
    /// 0.2 < score <= 0.5
    Good,
    /// -0.2 <= score <= 0.2
    Neutral,
    /// -0.5 <= score < -0.2
    Meh,
    /// score < -0.5
    Bad,
}

impl SentimentBucket {
    /// Maps a score onto its bucket, clamping out-of-range input to [-1, 1].
    pub fn classify(score: f64) -> Self {
        let score = score.clamp(SENTIMENT_SCORE_MIN, SENTIMENT_SCORE_MAX);
        if score > SENTIMENT_AWESOME_OVER {
            SentimentBucket::Awesome
        } else if score > SENTIMENT_GOOD_OVER {
            SentimentBucket::Good
        } else if score < SENTIMENT_BAD_UNDER {
            SentimentBucket::Bad
        } else if score < SENTIMENT_MEH_UNDER {
            SentimentBucket::Meh
        } else {
            SentimentBucket::Neutral
        }
    }

    /// Maps an optional score onto a bucket; absent scores get no bucket,
    /// which the view layer renders as no badge.
    pub fn from_score(score: Option<f64>) -> Option<Self> {
        score.map(Self::classify)
    }

    /// Display label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            SentimentBucket::Awesome => "Awesome",
            SentimentBucket::Good => "Good",
            SentimentBucket::Neutral => "Neutral",
            SentimentBucket::Meh => "Meh",
            SentimentBucket::Bad => "Bad",
        }
    }

    /// Display emoji for the bucket.
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentBucket::Awesome => "😄",
            SentimentBucket::Good => "🙂",
            SentimentBucket::Neutral => "😐",
            SentimentBucket::Meh => "😒",
            SentimentBucket::Bad => "😞",
        }
    }

    /// Foreground (text) color for the mood badge.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentBucket::Awesome | SentimentBucket::Good | SentimentBucket::Meh => "#333333",
            SentimentBucket::Neutral | SentimentBucket::Bad => "#FFFFFF",
        }
    }

    /// Background color for the mood badge and calendar indicator dots.
    pub fn bg_color(&self) -> &'static str {
        match self {
            SentimentBucket::Awesome => "#4CAF50",
            SentimentBucket::Good => "#8BC34A",
            SentimentBucket::Neutral => "#9E9E9E",
            SentimentBucket::Meh => "#FF9800",
            SentimentBucket::Bad => "#F44336",
        }
    }

    /// Ordinal position on the mood-trend y-axis: Bad is 0, Awesome is 4.
    pub fn y_axis(&self) -> u8 {
        match self {
            SentimentBucket::Bad => 0,
            SentimentBucket::Meh => 1,
            SentimentBucket::Neutral => 2,
            SentimentBucket::Good => 3,
            SentimentBucket::Awesome => 4,
        }
    }
}

/// Checks that a score is inside the valid [-1, 1] range.
///
/// # Errors
///
/// Returns `AppError::InvalidScore` for out-of-range scores. Use this on
/// write paths where a bad score should be rejected rather than clamped.
pub fn validate_score(score: f64) -> AppResult<f64> {
    if (SENTIMENT_SCORE_MIN..=SENTIMENT_SCORE_MAX).contains(&score) {
        Ok(score)
    } else {
        Err(AppError::InvalidScore(score))
    }
}

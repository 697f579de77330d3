//! Data models representing responses, ratings, and batch reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a response record.
///
/// The backend treats identifiers as opaque; integer and string forms both
/// occur in the wild and must round-trip exactly into the rating endpoint
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A judgment submitted for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The response is good.
    Approve,
    /// The response is bad.
    Reject,
}

impl Verdict {
    /// Signed score sent to the rating endpoint.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            Self::Approve => 1,
            Self::Reject => -1,
        }
    }
}

/// Rating state of a response as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStatus {
    /// No rating recorded yet.
    Unrated,
    /// Rated with a positive score.
    Approved,
    /// Rated with a negative score.
    Rejected,
}

impl RatingStatus {
    /// Human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unrated => "unrated",
            Self::Approved => "rated: good",
            Self::Rejected => "rated: bad",
        }
    }
}

/// One model-generated response awaiting (or carrying) a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// Response identifier, used to address the rating endpoint.
    pub id: ResponseId,
    /// Label of the model that produced the response.
    pub model: Option<String>,
    /// Prompt the model was given.
    pub prompt: Option<String>,
    /// The model's response text.
    pub response: Option<String>,
    /// Expected answer, when the prompt set has one.
    pub correct_answer: Option<String>,
    /// Recorded rating: absent, positive (approved), or negative (rejected).
    pub rating: Option<i64>,
    /// Total number of ratings recorded for this response.
    pub num_ratings: Option<u64>,
    /// Number of positive ratings.
    pub positive_ratings: Option<u64>,
    /// Number of negative ratings.
    pub negative_ratings: Option<u64>,
    /// Sum of all recorded scores.
    pub cumulative_score: Option<i64>,
}

impl ReviewItem {
    /// Whether no rating has been recorded for this response.
    #[must_use]
    pub const fn is_unrated(&self) -> bool {
        self.rating.is_none()
    }

    /// Rating state derived from the recorded score.
    ///
    /// A zero rating is treated as unrated; the backend only ever records
    /// non-zero scores.
    #[must_use]
    pub fn rating_status(&self) -> RatingStatus {
        match self.rating {
            Some(score) if score > 0 => RatingStatus::Approved,
            Some(score) if score < 0 => RatingStatus::Rejected,
            _ => RatingStatus::Unrated,
        }
    }
}

/// Report returned by the batch-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Completion status reported by the backend.
    pub status: String,
    /// Number of prompts processed.
    pub num_prompts: u64,
    /// Number of responses generated.
    pub num_responses: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiResponseRecord {
    pub(super) id: ResponseId,
    pub(super) model: Option<String>,
    pub(super) prompt: Option<String>,
    pub(super) response: Option<String>,
    pub(super) correct_answer: Option<String>,
    pub(super) rating: Option<i64>,
    pub(super) num_ratings: Option<u64>,
    pub(super) positive_ratings: Option<u64>,
    pub(super) negative_ratings: Option<u64>,
    pub(super) cumulative_score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiBatchReport {
    pub(super) status: Option<String>,
    pub(super) num_prompts: Option<u64>,
    pub(super) num_responses: Option<u64>,
}

impl From<ApiResponseRecord> for ReviewItem {
    fn from(value: ApiResponseRecord) -> Self {
        Self {
            id: value.id,
            model: value.model,
            prompt: value.prompt,
            response: value.response,
            correct_answer: value.correct_answer,
            rating: value.rating,
            num_ratings: value.num_ratings,
            positive_ratings: value.positive_ratings,
            negative_ratings: value.negative_ratings,
            cumulative_score: value.cumulative_score,
        }
    }
}

impl From<ApiBatchReport> for BatchOutcome {
    fn from(value: ApiBatchReport) -> Self {
        Self {
            status: value.status.unwrap_or_else(|| "unknown".to_owned()),
            num_prompts: value.num_prompts.unwrap_or(0),
            num_responses: value.num_responses.unwrap_or(0),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Timestamps are stored and served in this exact pattern.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field names match the CSV columns and the wire format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub review_id: String,

    #[serde(rename = "ReviewBody")]
    pub review_body: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

/// Read-time projection, never stored. `compound` is in [-1, 1], the
/// component scores are fractions in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,

    pub sentiment: SentimentScores,
}

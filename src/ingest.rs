//! # Review ingestion
//!
//! Write-path pipeline: decode the form body, validate it, construct the
//! review, and hand it to the configured [`ReviewWriter`]. The default
//! writer is a deliberate no-op, so submissions are echoed to the caller
//! without touching the loaded collection.

use axum::body::Bytes;
use chrono::Local;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::AppError,
    model::{Review, TIMESTAMP_FORMAT},
    store,
};

#[derive(Debug, Default, Deserialize)]
pub struct Submission {
    #[serde(rename = "Location")]
    pub location: Option<String>,

    #[serde(rename = "ReviewBody")]
    pub review_body: Option<String>,
}

impl Submission {
    pub fn from_form_bytes(bytes: &Bytes) -> Result<Self, AppError> {
        let text = std::str::from_utf8(bytes).map_err(|_| AppError::MalformedBody)?;

        serde_urlencoded::from_str(text).map_err(|_| AppError::MalformedBody)
    }
}

/// Seam for persisting accepted submissions.
pub trait ReviewWriter: Send + Sync {
    fn append(&self, review: &Review);
}

/// Accepts and drops every record. Persistence of submissions is
/// intentionally out of scope; swap in a real writer to change that.
pub struct NullReviewWriter;

impl ReviewWriter for NullReviewWriter {
    fn append(&self, review: &Review) {
        info!("Discarding accepted review {}", review.review_id);
    }
}

/// Validation order is part of the contract: location presence, then body
/// presence, then membership in the allowed set.
pub fn submit(submission: Submission, writer: &dyn ReviewWriter) -> Result<Review, AppError> {
    let location = submission
        .location
        .filter(|value| !value.is_empty())
        .ok_or(AppError::MissingLocation)?;

    let review_body = submission
        .review_body
        .filter(|value| !value.is_empty())
        .ok_or(AppError::MissingReviewBody)?;

    if !store::is_allowed_location(&location) {
        return Err(AppError::InvalidLocation);
    }

    let review = Review {
        review_id: Uuid::new_v4().to_string(),
        review_body,
        location,
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    };

    writer.append(&review);

    Ok(review)
}

//! # Review store
//!
//! In-memory collection of reviews, loaded once at startup from a CSV file
//! with columns `ReviewId,ReviewBody,Location,Timestamp`. The collection is
//! never mutated or rewritten after loading; every request reads the same
//! snapshot.

use std::{fs::File, path::Path};

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::info;

use crate::model::{Review, TIMESTAMP_FORMAT};

/// Locations a new submission may carry. The upstream list had two entries
/// run together and one duplicate; this is the corrected enumeration.
pub const ALLOWED_LOCATIONS: &[&str] = &[
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

pub fn is_allowed_location(location: &str) -> bool {
    ALLOWED_LOCATIONS.contains(&location)
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed review record: {0}")]
    Record(#[from] csv::Error),

    #[error("Review {id} has unparseable timestamp {timestamp:?}")]
    BadTimestamp { id: String, timestamp: String },
}

pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut reviews = Vec::new();

        for record in reader.deserialize() {
            let review: Review = record?;

            if NaiveDateTime::parse_from_str(&review.timestamp, TIMESTAMP_FORMAT).is_err() {
                return Err(StoreError::BadTimestamp {
                    id: review.review_id,
                    timestamp: review.timestamp,
                });
            }

            reviews.push(review);
        }

        info!("Loaded {} reviews from {}", reviews.len(), path.display());

        Ok(Self { reviews })
    }

    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    pub fn snapshot(&self) -> &[Review] {
        &self.reviews
    }
}

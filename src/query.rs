//! # Review queries
//!
//! Read-path pipeline: optional location and date-range filters over the
//! store snapshot, sentiment scoring of every surviving review, then a
//! stable sort by compound score descending.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::{
    error::AppError,
    model::{ScoredReview, TIMESTAMP_FORMAT},
    sentiment::SentimentScorer,
    store::ReviewStore,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub fn run_query(
    store: &ReviewStore,
    scorer: &dyn SentimentScorer,
    params: &ReviewQuery,
) -> Result<Vec<ScoredReview>, AppError> {
    let start = parse_date_filter(params.start_date.as_deref())?;
    let end = parse_date_filter(params.end_date.as_deref())?;

    let mut scored: Vec<ScoredReview> = store
        .snapshot()
        .iter()
        .filter(|review| match params.location.as_deref() {
            Some(location) => review.location == location,
            None => true,
        })
        .filter(|review| within_range(&review.timestamp, start, end))
        .map(|review| ScoredReview {
            sentiment: scorer.score(&review.review_body),
            review: review.clone(),
        })
        .collect();

    // Stable sort: equal compounds keep their filtered order.
    scored.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));

    Ok(scored)
}

fn parse_date_filter(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match raw {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| AppError::MalformedDateFilter(value.to_string())),
    }
}

/// Both bounds are inclusive and compare against the timestamp's date
/// component, so an `end_date` covers that entire day.
fn within_range(timestamp: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    // Timestamps are validated at load time.
    let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) else {
        return false;
    };
    let date = parsed.date();

    start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
}

#[cfg(test)]
mod tests {
    use crate::{
        error::AppError,
        model::{Review, SentimentScores},
        sentiment::SentimentScorer,
        store::ReviewStore,
    };

    use super::{ReviewQuery, run_query};

    /// Scores by keyword so tests control the ordering exactly.
    struct StubScorer;

    impl SentimentScorer for StubScorer {
        fn score(&self, text: &str) -> SentimentScores {
            let compound = if text.contains("glowing") {
                0.9
            } else if text.contains("harsh") {
                -0.8
            } else {
                0.0
            };

            SentimentScores {
                negative: 0.0,
                neutral: 1.0,
                positive: 0.0,
                compound,
            }
        }
    }

    fn review(id: &str, body: &str, location: &str, timestamp: &str) -> Review {
        Review {
            review_id: id.to_string(),
            review_body: body.to_string(),
            location: location.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn store() -> ReviewStore {
        ReviewStore::from_reviews(vec![
            review("r1", "harsh words", "Phoenix, Arizona", "2024-01-10 08:00:00"),
            review("r2", "nothing notable", "Denver, Colorado", "2024-02-15 12:30:00"),
            review("r3", "glowing praise", "Phoenix, Arizona", "2024-03-20 18:45:00"),
            review("r4", "also nothing", "San Diego, California", "2024-03-20 23:59:59"),
        ])
    }

    fn query(location: Option<&str>, start: Option<&str>, end: Option<&str>) -> ReviewQuery {
        ReviewQuery {
            location: location.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn test_no_filters_returns_all_sorted() {
        let results = run_query(&store(), &StubScorer, &ReviewQuery::default()).unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].review.review_id, "r3");
        assert_eq!(results[3].review.review_id, "r1");

        for pair in results.windows(2) {
            assert!(pair[0].sentiment.compound >= pair[1].sentiment.compound);
        }
    }

    #[test]
    fn test_location_filter_exact_match() {
        let results = run_query(&store(), &StubScorer, &query(Some("Phoenix, Arizona"), None, None))
            .unwrap();

        assert_eq!(results.len(), 2);
        for scored in &results {
            assert_eq!(scored.review.location, "Phoenix, Arizona");
        }
    }

    #[test]
    fn test_location_filter_no_normalization() {
        let results = run_query(&store(), &StubScorer, &query(Some("phoenix, arizona"), None, None))
            .unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let results = run_query(
            &store(),
            &StubScorer,
            &query(None, Some("2024-02-15"), Some("2024-03-20")),
        )
        .unwrap();

        let ids: Vec<&str> = results.iter().map(|s| s.review.review_id.as_str()).collect();

        // r2 sits on the start day, r4 late on the end day; both are kept.
        assert!(ids.contains(&"r2"));
        assert!(ids.contains(&"r3"));
        assert!(ids.contains(&"r4"));
        assert!(!ids.contains(&"r1"));
    }

    #[test]
    fn test_start_date_only() {
        let results =
            run_query(&store(), &StubScorer, &query(None, Some("2024-03-01"), None)).unwrap();

        assert_eq!(results.len(), 2);
        for scored in &results {
            assert!(scored.review.timestamp.as_str() >= "2024-03-01 00:00:00");
        }
    }

    #[test]
    fn test_end_date_only() {
        let results =
            run_query(&store(), &StubScorer, &query(None, None, Some("2024-01-31"))).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].review.review_id, "r1");
    }

    #[test]
    fn test_combined_filters() {
        let results = run_query(
            &store(),
            &StubScorer,
            &query(Some("Phoenix, Arizona"), Some("2024-02-01"), None),
        )
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].review.review_id, "r3");
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        // r2 and r4 both score 0.0 and must keep their stored order.
        let results = run_query(&store(), &StubScorer, &ReviewQuery::default()).unwrap();

        let tied: Vec<&str> = results
            .iter()
            .filter(|s| s.sentiment.compound == 0.0)
            .map(|s| s.review.review_id.as_str())
            .collect();

        assert_eq!(tied, vec!["r2", "r4"]);
    }

    #[test]
    fn test_malformed_start_date() {
        let result = run_query(&store(), &StubScorer, &query(None, Some("15-01-2024"), None));

        assert!(matches!(result, Err(AppError::MalformedDateFilter(_))));
    }

    #[test]
    fn test_malformed_end_date() {
        let result = run_query(&store(), &StubScorer, &query(None, None, Some("soon")));

        assert!(matches!(result, Err(AppError::MalformedDateFilter(_))));
    }

    #[test]
    fn test_sentiment_attached_to_every_result() {
        let results = run_query(&store(), &StubScorer, &ReviewQuery::default()).unwrap();

        assert!(results.iter().all(|s| s.sentiment.neutral == 1.0));
    }
}

use std::sync::Arc;

use crate::{
    config::Config,
    ingest::{NullReviewWriter, ReviewWriter},
    sentiment::{LexiconScorer, SentimentScorer},
    store::ReviewStore,
};

pub struct AppState {
    pub config: Config,
    pub store: ReviewStore,
    pub scorer: Box<dyn SentimentScorer>,
    pub writer: Box<dyn ReviewWriter>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let store =
            ReviewStore::load(config.reviews_path.as_ref()).expect("Review data misconfigured!");

        Self::with_parts(
            config,
            store,
            Box::new(LexiconScorer::new()),
            Box::new(NullReviewWriter),
        )
    }

    pub fn with_parts(
        config: Config,
        store: ReviewStore,
        scorer: Box<dyn SentimentScorer>,
        writer: Box<dyn ReviewWriter>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            store,
            scorer,
            writer,
        })
    }
}

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    ingest::{self, Submission},
    query::{self, ReviewQuery},
    state::AppState,
};

pub async fn reviews_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let scored = query::run_query(&state.store, state.scorer.as_ref(), &params)?;

    Ok((StatusCode::OK, Json(scored)))
}

pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let submission = Submission::from_form_bytes(&body)?;
    let review = ingest::submit(submission, state.writer.as_ref())?;

    Ok((StatusCode::CREATED, Json(review)))
}

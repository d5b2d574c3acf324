//! Axum route handlers for the matching API.

use axum::{extract::State, Json};
use tracing::info;

use crate::ats::fetch_postings;
use crate::errors::AppError;
use crate::matching::ranking::rank_postings;
use crate::models::posting::JobPosting;
use crate::state::AppState;

/// GET /api/matching-jobs
///
/// Fetches every profile target in order, scores the postings, and returns
/// those at or above the profile threshold, best first.
pub async fn handle_matching_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let profile = &state.profile;

    let postings = fetch_postings(state.job_source.as_ref(), &profile.targets).await?;
    let fetched = postings.len();

    let ranked = rank_postings(postings, state.scorer.as_ref(), profile.min_score);
    info!("Matched {} of {} fetched postings", ranked.len(), fetched);

    Ok(Json(ranked))
}

//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};

use crate::analysis::analyzer::generate_trend_analysis;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::profile::ContentCreatorProfile;
use crate::state::AppState;

/// POST /api/analyze
///
/// Generates a trend analysis for the submitted creator profile and returns the
/// recovered JSON unchanged.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(profile): Json<ContentCreatorProfile>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = generate_trend_analysis(state.llm.as_ref(), &profile).await?;
    Ok(Json(result))
}

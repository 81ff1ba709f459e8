//! Trend Analyzer: runs one analysis end to end.
//!
//! Flow: build_analysis_prompt → TextGenerator::generate → recover_analysis.
//! Nothing is retried and nothing is kept between calls.

use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::recoverer::recover_analysis;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::analysis::AnalysisResult;
use crate::models::profile::ContentCreatorProfile;

pub async fn generate_trend_analysis(
    llm: &dyn TextGenerator,
    profile: &ContentCreatorProfile,
) -> Result<AnalysisResult, AppError> {
    let request_id = Uuid::new_v4();
    let prompt = build_analysis_prompt(profile);
    info!(
        %request_id,
        model = llm.model(),
        platform = %profile.platform,
        niche = %profile.niche,
        prompt_bytes = prompt.len(),
        "Requesting trend analysis"
    );

    let raw = llm.generate(&prompt).await?;
    info!(%request_id, response_bytes = raw.len(), "Model responded");

    let result = recover_analysis(&raw)?;

    let missing = result.missing_sections();
    if !missing.is_empty() {
        warn!(%request_id, ?missing, "Analysis is missing expected sections");
    }

    Ok(result)
}

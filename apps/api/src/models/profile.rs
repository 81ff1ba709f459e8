use serde::{Deserialize, Serialize};

/// Caller-supplied description of a content creator.
/// Values are free text and are interpolated into the prompt verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreatorProfile {
    pub niche: String,
    pub platform: String,
    pub target_audience: String,
    pub content_style: String,
}

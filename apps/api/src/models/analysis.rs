use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level sections the prompt asks the model to return.
pub const EXPECTED_SECTIONS: [&str; 7] = [
    "trending_topics",
    "hashtag_strategy",
    "content_templates",
    "best_posting_times",
    "content_calendar_suggestions",
    "competitor_insights",
    "tools_and_resources",
];

/// Trend analysis payload recovered from the model.
///
/// The shape is a contract with the model, not something this service enforces:
/// the parsed JSON is carried through untouched, including missing, extra, or
/// mistyped fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Expected sections absent from the payload. Used for logging only.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        EXPECTED_SECTIONS
            .iter()
            .copied()
            .filter(|key| self.0.get(key).is_none())
            .collect()
    }
}

impl Deref for AnalysisResult {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_payload_has_no_missing_sections() {
        let result = AnalysisResult::new(json!({
            "trending_topics": [],
            "hashtag_strategy": [],
            "content_templates": [],
            "best_posting_times": [],
            "content_calendar_suggestions": [],
            "competitor_insights": {},
            "tools_and_resources": []
        }));
        assert!(result.missing_sections().is_empty());
    }

    #[test]
    fn test_missing_sections_listed_in_schema_order() {
        let result = AnalysisResult::new(json!({
            "hashtag_strategy": [],
            "tools_and_resources": [],
            "unexpected": true
        }));
        assert_eq!(
            result.missing_sections(),
            vec![
                "trending_topics",
                "content_templates",
                "best_posting_times",
                "content_calendar_suggestions",
                "competitor_insights",
            ]
        );
    }

    #[test]
    fn test_serializes_transparently() {
        let payload = json!({"trending_topics": [{"topic": "x", "relevance_score": "high"}]});
        let result = AnalysisResult::new(payload.clone());
        assert_eq!(serde_json::to_value(&result).unwrap(), payload);
    }
}

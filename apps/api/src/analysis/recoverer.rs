//! Response Recoverer: pulls the JSON object out of free-form model text.
//!
//! Models often wrap their answer in prose or markdown fences despite instructions.
//! Recovery takes everything from the first `{` to the last `}` and parses it. Two
//! disjoint objects in the text are therefore captured together and fail to parse.

use thiserror::Error;

use crate::models::analysis::AnalysisResult;

#[derive(Debug, Error)]
pub enum RecoverError {
    #[error("Could not extract JSON from response")]
    MalformedResponse,

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the slice spanning the first `{` through the last `}`, inclusive.
pub fn extract_json_object(text: &str) -> Result<&str, RecoverError> {
    match (text.find('{'), text.rfind('}')) {
        // both are ASCII, so byte offsets land on char boundaries
        (Some(start), Some(end)) if end > start => Ok(&text[start..=end]),
        _ => Err(RecoverError::MalformedResponse),
    }
}

/// Recovers the analysis payload from raw model output. No schema validation is applied.
pub fn recover_analysis(text: &str) -> Result<AnalysisResult, RecoverError> {
    let json = extract_json_object(text)?;
    let value = serde_json::from_str(json)?;
    Ok(AnalysisResult::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const EMPTY_ANALYSIS: &str = r#"{"trending_topics": [], "hashtag_strategy": [], "content_templates": [], "best_posting_times": [], "content_calendar_suggestions": [], "competitor_insights": {"top_performing_formats": [], "common_pain_points": [], "opportunities": []}, "tools_and_resources": []}"#;

    #[test]
    fn test_fenced_response_recovered() {
        let raw = format!("Here is your analysis:\n```json\n{EMPTY_ANALYSIS}\n```");
        let result = recover_analysis(&raw).expect("should recover");
        let value = &*result;

        assert!(result.missing_sections().is_empty());
        for key in [
            "trending_topics",
            "hashtag_strategy",
            "content_templates",
            "best_posting_times",
            "content_calendar_suggestions",
            "tools_and_resources",
        ] {
            assert_eq!(value[key], json!([]), "{key} should be an empty array");
        }
        assert_eq!(
            value["competitor_insights"],
            json!({"top_performing_formats": [], "common_pain_points": [], "opportunities": []})
        );
    }

    #[test]
    fn test_wrapped_equals_direct_parse() {
        let direct: Value = serde_json::from_str(EMPTY_ANALYSIS).unwrap();
        for (prefix, suffix) in [
            ("", ""),
            ("Sure! ", " Hope this helps."),
            ("```\n", "\n```"),
            ("Analysis (v2):\n\n", "\n\n-- end --"),
        ] {
            let raw = format!("{prefix}{EMPTY_ANALYSIS}{suffix}");
            let recovered = recover_analysis(&raw).unwrap();
            assert_eq!(&*recovered, &direct);
        }
    }

    #[test]
    fn test_nested_braces_inside_strings_survive() {
        let raw = r#"Result: {"structure": "Hook {0-3s} then payoff }", "n": {"k": 1}} done"#;
        let value = recover_analysis(raw).unwrap();
        assert_eq!(value["structure"], "Hook {0-3s} then payoff }");
        assert_eq!(value["n"]["k"], 1);
    }

    #[test]
    fn test_no_braces_is_malformed() {
        let err = recover_analysis("I'm sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, RecoverError::MalformedResponse));
        assert_eq!(err.to_string(), "Could not extract JSON from response");
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            recover_analysis(""),
            Err(RecoverError::MalformedResponse)
        ));
    }

    #[test]
    fn test_only_opening_brace_is_malformed() {
        assert!(matches!(
            recover_analysis("{ \"trending_topics\": ["),
            Err(RecoverError::MalformedResponse)
        ));
    }

    #[test]
    fn test_closing_before_opening_is_malformed() {
        assert!(matches!(
            recover_analysis("} nothing here {"),
            Err(RecoverError::MalformedResponse)
        ));
    }

    #[test]
    fn test_invalid_interior_is_parse_error() {
        let err = recover_analysis("{not json}").unwrap_err();
        assert!(matches!(err, RecoverError::Parse(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_two_disjoint_objects_fail_to_parse() {
        let raw = r#"First: {"a": 1} and second: {"b": 2}"#;
        assert_eq!(
            extract_json_object(raw).unwrap(),
            r#"{"a": 1} and second: {"b": 2}"#
        );
        assert!(matches!(recover_analysis(raw), Err(RecoverError::Parse(_))));
    }

    #[test]
    fn test_stray_brace_in_prose_breaks_recovery() {
        let raw = format!("Note: use {{ carefully. {EMPTY_ANALYSIS}");
        assert!(matches!(recover_analysis(&raw), Err(RecoverError::Parse(_))));
    }

    #[test]
    fn test_multibyte_prose_around_object() {
        let raw = "Voilà ✨ {\"topic\": \"café\"} — fin";
        let value = recover_analysis(raw).unwrap();
        assert_eq!(value["topic"], "café");
    }
}

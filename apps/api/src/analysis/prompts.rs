//! Request Formatter: renders a creator profile into the trend-analysis prompt.

use crate::models::profile::ContentCreatorProfile;

/// Renders the trend-analysis prompt for `profile`.
///
/// Profile values are substituted in one pass, so input that happens to look like a
/// placeholder is never expanded again.
pub fn build_analysis_prompt(profile: &ContentCreatorProfile) -> String {
    format!(
        r##"You are an expert content strategist and trend analyst specializing in short-form content creation.

Analyze the following content creator profile and provide comprehensive trend analysis and actionable templates:

Content Creator Niche: {niche}
Primary Platform: {platform}
Target Audience: {target_audience}
Content Style Preference: {content_style}

Please provide your response in the following JSON format (and ONLY this format):
{{
    "trending_topics": [
        {{
            "topic": "topic name",
            "relevance_score": 0-100,
            "growth_trend": "increasing/stable/decreasing",
            "search_volume": "high/medium/low",
            "audience_interest": "description of why this matters"
        }}
    ],
    "hashtag_strategy": [
        {{
            "hashtag": "#example",
            "type": "trending/niche/brand",
            "expected_reach": "number range"
        }}
    ],
    "content_templates": [
        {{
            "template_name": "name",
            "duration": "seconds",
            "structure": "step by step structure",
            "key_hooks": ["hook1", "hook2"],
            "engagement_tactics": ["tactic1", "tactic2"]
        }}
    ],
    "best_posting_times": [
        {{
            "day": "day of week",
            "time": "HH:MM (24-hour format)",
            "expected_engagement": "percentage/rating"
        }}
    ],
    "content_calendar_suggestions": [
        "suggestion 1",
        "suggestion 2",
        "suggestion 3"
    ],
    "competitor_insights": {{
        "top_performing_formats": ["format1", "format2"],
        "common_pain_points": ["issue1", "issue2"],
        "opportunities": ["opportunity1", "opportunity2"]
    }},
    "tools_and_resources": [
        {{
            "tool_name": "name",
            "purpose": "what it does",
            "cost": "free/paid"
        }}
    ]
}}

Ensure all data is realistic, current, and actionable. Base recommendations on actual trends in the {niche} niche."##,
        niche = profile.niche,
        platform = profile.platform,
        target_audience = profile.target_audience,
        content_style = profile.content_style,
    )
}

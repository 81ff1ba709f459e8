// Trend analysis: prompt formatting, the upstream model call, and response recovery.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod recoverer;

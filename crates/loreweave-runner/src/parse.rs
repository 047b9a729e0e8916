//! Event payload parsing with code-fence recovery.
//!
//! The storyteller is supposed to answer with a bare JSON object, but it
//! sometimes wraps the payload in a markdown code fence (```` ```json ... ``` ````).
//! Parsing tries the raw text first and falls back to stripping the fence
//! markers. Anything still malformed after that is an error the pipeline
//! turns into a logged skip, the same policy as every other validation
//! failure.

use loreweave_types::WorldEvent;

use crate::error::PipelineError;

/// Parse a raw event payload into a [`WorldEvent`].
///
/// # Errors
///
/// Returns [`PipelineError::Parse`] when the payload is not a valid event
/// object even after fence stripping.
pub fn parse_event(raw: &str) -> Result<WorldEvent, PipelineError> {
    let trimmed = raw.trim();

    if let Ok(event) = serde_json::from_str::<WorldEvent>(trimmed) {
        return Ok(event);
    }

    let stripped = strip_code_fences(trimmed);
    serde_json::from_str(&stripped).map_err(|e| {
        PipelineError::Parse(format!("payload rejected after fence stripping: {e}"))
    })
}

/// Remove markdown code-fence markers and surrounding whitespace.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_owned()
}

//! Purpose: Single parse boundary turning raw editor text into a `ParseOutcome`.
//! Exports: `ParseOutcome`, `parse`.
//! Role: Leaf component; all runtime JSON decoding of user input goes through here.
//! Invariants: Parse failures carry serde_json's native positioned message verbatim.
//! Invariants: Empty (whitespace-only) input is Valid and maps to the Null absence marker.
//! Invariants: `parse` is pure and deterministic; no partial tree survives a failure.

use serde_json::Value;

/// Terminal result of a single parse attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome {
    Valid(Value),
    Invalid(String),
}

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseOutcome::Valid(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            ParseOutcome::Valid(value) => Some(value),
            ParseOutcome::Invalid(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ParseOutcome::Valid(_) => None,
            ParseOutcome::Invalid(message) => Some(message),
        }
    }
}

/// Parse `raw` as a single RFC 8259 JSON document.
///
/// Whitespace-only input is the normal "no content yet" editor state and is
/// reported as `Valid(Null)`; callers that need to distinguish it from a
/// literal `null` document check the raw text themselves.
pub fn parse(raw: &str) -> ParseOutcome {
    if raw.trim().is_empty() {
        return ParseOutcome::Valid(Value::Null);
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => ParseOutcome::Valid(value),
        Err(err) => ParseOutcome::Invalid(err.to_string()),
    }
}

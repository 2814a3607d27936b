//! Purpose: Define the seam for external AI repair/type-generation collaborators.
//! Exports: `Assistant`, `AssistResult`, `RepairOutcome`, `repair_invalid`.
//! Role: Interface-only boundary; the host supplies the actual model client.
//! Invariants: A failing collaborator never alters the caller's input buffer.
//! Invariants: A repaired replacement is accepted only if it parses cleanly.

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::parse::{ParseOutcome, parse};

pub type AssistResult<T> = Result<T, Error>;

/// Opaque string-in/string-out collaborators backed by an external model.
///
/// Both calls are fallible (network, quota, malformed model output) and the
/// host decides blocking vs async dispatch; the core only needs the contract.
pub trait Assistant {
    fn fix_invalid_json(&self, text: &str) -> AssistResult<String>;
    fn generate_type_interfaces(&self, text: &str) -> AssistResult<String>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum RepairOutcome {
    /// Input already parsed; no collaborator call was made.
    AlreadyValid(Value),
    /// Collaborator produced a replacement that parses.
    Repaired { text: String, value: Value },
}

/// Ask the assistant to repair `raw` if (and only if) it fails to parse.
///
/// The original text is read-only throughout; on any failure the caller's
/// buffer and current tree stay exactly as they were.
pub fn repair_invalid(assistant: &dyn Assistant, raw: &str) -> AssistResult<RepairOutcome> {
    let message = match parse(raw) {
        ParseOutcome::Valid(value) => return Ok(RepairOutcome::AlreadyValid(value)),
        ParseOutcome::Invalid(message) => message,
    };

    let replacement = assistant.fix_invalid_json(raw).map_err(|err| {
        err.with_hint(format!("Original parse failure was: {message}"))
    })?;

    match parse(&replacement) {
        ParseOutcome::Valid(value) => Ok(RepairOutcome::Repaired {
            text: replacement,
            value,
        }),
        ParseOutcome::Invalid(second) => Err(Error::new(ErrorKind::Assist)
            .with_message(format!("assistant returned invalid JSON: {second}"))
            .with_hint("The input was left untouched. Retry, or fix the text manually.")),
    }
}

//! Purpose: Recursively decode string leaves that carry embedded JSON documents.
//! Exports: `ResolveConfig`, `resolve`, `resolve_top_level`, depth bound constants.
//! Role: Pure transformation from a parsed value to the unified display tree.
//! Invariants: Only a successful embedded decode consumes depth budget; structural
//! Invariants:   descent into arrays/objects is free.
//! Invariants: Decode failure degrades silently to the original string leaf.
//! Invariants: Input is never mutated; key order of objects is preserved.

use serde_json::{Map, Value};

pub const MIN_DECODE_DEPTH: u8 = 1;
pub const MAX_DECODE_DEPTH: u8 = 10;
pub const DEFAULT_DECODE_DEPTH: u8 = 3;

/// Resolver switch and decode-round budget.
///
/// `max_depth` is clamped to `[MIN_DECODE_DEPTH, MAX_DECODE_DEPTH]` at
/// construction; out-of-range values are a UI concern, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolveConfig {
    enabled: bool,
    max_depth: u8,
}

impl ResolveConfig {
    pub fn new(enabled: bool, max_depth: u8) -> Self {
        Self {
            enabled,
            max_depth: max_depth.clamp(MIN_DECODE_DEPTH, MAX_DECODE_DEPTH),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self::new(true, DEFAULT_DECODE_DEPTH)
    }
}

/// Resolve embedded JSON in `value`, or return it untouched when disabled.
///
/// The disabled path is an owned pass-through with zero traversal cost, so
/// callers can thread the config unconditionally on every edit.
pub fn resolve_top_level(value: Value, config: &ResolveConfig) -> Value {
    if !config.is_enabled() {
        return value;
    }
    resolve(&value, 0, config)
}

/// One depth-first resolution pass, entered at `depth = 0`.
///
/// Structural recursion is bounded because every tree handled here came out
/// of serde_json, whose parser enforces its own recursion limit per decode
/// round, and decode rounds are bounded by `config.max_depth()`.
pub fn resolve(value: &Value, depth: u8, config: &ResolveConfig) -> Value {
    if depth >= config.max_depth() {
        return value.clone();
    }
    match value {
        Value::String(text) => {
            resolve_embedded(text, depth, config).unwrap_or_else(|| value.clone())
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve(item, depth, config))
                .collect(),
        ),
        Value::Object(fields) => {
            let mut resolved = Map::new();
            for (key, field) in fields {
                resolved.insert(key.clone(), resolve(field, depth, config));
            }
            Value::Object(resolved)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

/// Attempt one decode round on a string leaf.
///
/// The first-character gate means scalar-encoded strings like `"42"` are
/// never unwrapped; only `{`/`[` documents count as an encoding layer.
fn resolve_embedded(text: &str, depth: u8, config: &ResolveConfig) -> Option<Value> {
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }
    let decoded = serde_json::from_str::<Value>(trimmed).ok()?;
    Some(resolve(&decoded, depth + 1, config))
}

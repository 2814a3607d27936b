//! Purpose: Centralize stringify policy for emitting `Value` trees as text.
//! Exports: `PRETTY_INDENT`, `to_pretty`, `to_compact`.
//! Role: Shared serialization wrappers used by CLI emission and round-trip tests.
//! Invariants: Pretty output uses a fixed two-space indent; compact output has no
//! Invariants:   interstitial whitespace. Key order is emitted as stored.

use serde_json::Value;

pub const PRETTY_INDENT: &str = "  ";

pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

pub fn to_compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::{PRETTY_INDENT, to_compact, to_pretty};
    use serde_json::json;

    #[test]
    fn pretty_uses_fixed_indent() {
        let text = to_pretty(&json!({"a": [1]}));
        assert!(text.contains(&format!("\n{PRETTY_INDENT}\"a\"")));
    }

    #[test]
    fn compact_has_no_whitespace() {
        let text = to_compact(&json!({"a": [1, 2], "b": "x y"}));
        assert_eq!(text, r#"{"a":[1,2],"b":"x y"}"#);
    }
}

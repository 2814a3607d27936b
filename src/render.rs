//! Purpose: Render `Value` trees as pretty text with optional ANSI colorization.
//! Exports: `RenderOptions`, `render_json`, `ABSENT_DISPLAY`.
//! Role: Small, pure renderer used by CLI emission paths for inspection output.
//! Invariants: With color off and the default indent, output equals `to_pretty`.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use serde_json::Value;

/// Placeholder shown for empty input, which parses to the absence marker.
pub const ABSENT_DISPLAY: &str = "(no content)";

// Conservative 8/16-color palette for broad terminal compatibility.
// Avoid bright variants that can lose contrast on themes like Solarized.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub color: bool,
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            indent_width: 2,
        }
    }
}

pub fn render_json(value: &Value, options: RenderOptions) -> String {
    let mut renderer = Renderer {
        options,
        out: String::new(),
    };
    renderer.value(value, 0);
    renderer.out
}

struct Renderer {
    options: RenderOptions,
    out: String,
}

impl Renderer {
    fn value(&mut self, value: &Value, level: usize) {
        match value {
            Value::Null => self.colored("null", COLOR_NULL),
            Value::Bool(val) => {
                let text = if *val { "true" } else { "false" };
                self.colored(text, COLOR_BOOL);
            }
            Value::Number(num) => {
                let text = num.to_string();
                self.colored(&text, COLOR_NUMBER);
            }
            Value::String(text) => {
                let encoded =
                    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
                self.colored(&encoded, COLOR_STRING);
            }
            Value::Array(items) => self.array(items, level),
            Value::Object(fields) => self.object(fields, level),
        }
    }

    fn array(&mut self, items: &[Value], level: usize) {
        if items.is_empty() {
            self.colored("[]", COLOR_PUNCT);
            return;
        }
        self.colored("[", COLOR_PUNCT);
        self.out.push('\n');
        for (idx, item) in items.iter().enumerate() {
            self.indent(level + 1);
            self.value(item, level + 1);
            if idx + 1 < items.len() {
                self.colored(",", COLOR_PUNCT);
            }
            self.out.push('\n');
        }
        self.indent(level);
        self.colored("]", COLOR_PUNCT);
    }

    fn object(&mut self, fields: &serde_json::Map<String, Value>, level: usize) {
        if fields.is_empty() {
            self.colored("{}", COLOR_PUNCT);
            return;
        }
        self.colored("{", COLOR_PUNCT);
        self.out.push('\n');
        let len = fields.len();
        for (idx, (key, value)) in fields.iter().enumerate() {
            self.indent(level + 1);
            let encoded = serde_json::to_string(key).unwrap_or_else(|_| "\"\"".to_string());
            self.colored(&encoded, COLOR_KEY);
            self.colored(":", COLOR_PUNCT);
            self.out.push(' ');
            self.value(value, level + 1);
            if idx + 1 < len {
                self.colored(",", COLOR_PUNCT);
            }
            self.out.push('\n');
        }
        self.indent(level);
        self.colored("}", COLOR_PUNCT);
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level * self.options.indent_width {
            self.out.push(' ');
        }
    }

    fn colored(&mut self, text: &str, color: &str) {
        if !self.options.color {
            self.out.push_str(text);
            return;
        }
        self.out.push_str("\u{1b}[");
        self.out.push_str(color);
        self.out.push('m');
        self.out.push_str(text);
        self.out.push_str("\u{1b}[0m");
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderOptions, render_json};
    use serde_json::json;

    #[test]
    fn default_render_matches_pretty() {
        let value = json!({
            "arr": [1, true, null],
            "nested": { "x": "y" }
        });
        let plain = render_json(&value, RenderOptions::default());
        let pretty = serde_json::to_string_pretty(&value).expect("pretty");
        assert_eq!(plain, pretty);
    }

    #[test]
    fn color_render_emits_ansi_per_token_class() {
        let value = json!({"k":"v","n":1,"b":true,"z":null});
        let colored = render_json(
            &value,
            RenderOptions {
                color: true,
                ..RenderOptions::default()
            },
        );
        assert!(colored.contains("\u{1b}[36m\"k\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[32m\"v\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[33m1\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[35mtrue\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[39mnull\u{1b}[0m"));
    }

    #[test]
    fn indent_width_is_configurable() {
        let value = json!({"a": 1});
        let wide = render_json(
            &value,
            RenderOptions {
                color: false,
                indent_width: 4,
            },
        );
        assert!(wide.contains("\n    \"a\""));
    }
}

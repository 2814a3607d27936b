//! Purpose: Lock parser contract expectations with corpus coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Pin down `parse` outcomes, message shape, and round-trip behavior.
//! Invariants: Invalid outcomes always carry the parser's positioned message.
//! Invariants: Round-trip through compact stringify preserves structure and key order.

use jsonlens::api::{ParseOutcome, parse, to_compact, to_pretty};
use serde_json::Value;

#[test]
fn corpus_valid_payloads_match_baseline_values() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{"unicode":"☃"}"#,
        r#"{"big":1e308,"neg":-0.5}"#,
    ];

    for case in corpus {
        let outcome = parse(case);
        let baseline: Value = serde_json::from_str(case).expect("baseline parse");
        assert_eq!(outcome, ParseOutcome::Valid(baseline), "case: {case}");
    }
}

#[test]
fn corpus_malformed_payloads_report_position() {
    let corpus = [
        r#"{"a":1,"#,
        r#"{"a":}"#,
        r#"[1,2,"#,
        r#"{'single': 1}"#,
        r#"{"dup": 1 "missing": 2}"#,
    ];

    for case in corpus {
        let outcome = parse(case);
        let message = outcome
            .error_message()
            .unwrap_or_else(|| panic!("expected Invalid for: {case}"));
        assert!(!message.is_empty());
        assert!(
            message.contains("line") && message.contains("column"),
            "message lacks position for {case}: {message}"
        );
    }
}

#[test]
fn round_trip_preserves_structure_and_key_order() {
    let corpus = [
        r#"{"z":1,"a":{"m":[true,null]},"k":"v"}"#,
        r#"[{"b":2,"a":1},[],{}]"#,
        r#"{"s":"line\nbreak","u":"é"}"#,
    ];

    for case in corpus {
        let value: Value = serde_json::from_str(case).expect("corpus parse");
        for text in [to_compact(&value), to_pretty(&value)] {
            match parse(&text) {
                ParseOutcome::Valid(reparsed) => assert_eq!(reparsed, value, "case: {case}"),
                ParseOutcome::Invalid(message) => panic!("round-trip failed: {message}"),
            }
        }
        assert_eq!(to_compact(&value), case.replace([' '], ""), "key order drifted: {case}");
    }
}

#[test]
fn structurally_overdeep_document_is_invalid_not_fatal() {
    // serde_json enforces a recursion limit; the outcome must stay a value.
    let depth = 512usize;
    let mut payload = String::with_capacity(depth * 2 + 1);
    for _ in 0..depth {
        payload.push('[');
    }
    payload.push('0');
    for _ in 0..depth {
        payload.push(']');
    }
    let outcome = parse(&payload);
    let message = outcome.error_message().expect("expected Invalid");
    assert!(!message.is_empty());
}

#[test]
fn absence_marker_is_distinct_from_literal_null_only_in_raw_text() {
    let empty = parse("   ");
    let literal = parse("null");
    // Both map to the same in-memory marker; callers inspect the raw text
    // when they need to tell "no content" apart from a null document.
    assert_eq!(empty, literal);
    assert_eq!(empty, ParseOutcome::Valid(Value::Null));
}

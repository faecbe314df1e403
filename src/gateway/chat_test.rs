use super::*;
use serde_json::json;

fn sse_event(text: &str) -> String {
    format!(
        "data: {}",
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
    )
}

// =========================================================================
// next_line
// =========================================================================

#[test]
fn next_line_pops_complete_lines_only() {
    let mut buffer = String::from("one\ntwo\npart");
    assert_eq!(next_line(&mut buffer).as_deref(), Some("one"));
    assert_eq!(next_line(&mut buffer).as_deref(), Some("two"));
    assert_eq!(next_line(&mut buffer), None);
    assert_eq!(buffer, "part");
}

#[test]
fn next_line_strips_carriage_returns() {
    let mut buffer = String::from("data: x\r\nrest");
    assert_eq!(next_line(&mut buffer).as_deref(), Some("data: x"));
    assert_eq!(buffer, "rest");
}

// =========================================================================
// sse_fragment
// =========================================================================

#[test]
fn fragment_is_extracted_from_data_line() {
    assert_eq!(sse_fragment(&sse_event("Hello")).as_deref(), Some("Hello"));
}

#[test]
fn multiple_parts_concatenate() {
    let line = format!(
        "data: {}",
        json!({ "candidates": [{ "content": { "parts": [{ "text": "Hel" }, { "text": "lo" }] } }] })
    );
    assert_eq!(sse_fragment(&line).as_deref(), Some("Hello"));
}

#[test]
fn non_data_lines_are_ignored() {
    assert_eq!(sse_fragment(""), None);
    assert_eq!(sse_fragment(": keep-alive"), None);
    assert_eq!(sse_fragment("event: done"), None);
}

#[test]
fn terminator_and_textless_payloads_are_ignored() {
    assert_eq!(sse_fragment("data: [DONE]"), None);
    assert_eq!(sse_fragment("data: {\"candidates\":[]}"), None);
    assert_eq!(sse_fragment("data: not json"), None);
}

// =========================================================================
// chunked stream reassembly
// =========================================================================

/// Fragments split arbitrarily across transport chunks reassemble in order —
/// ["Hel", "lo"] must read back as exactly those two fragments.
#[test]
fn fragments_survive_arbitrary_chunk_boundaries() {
    let wire = format!("{}\n\n{}\n\n", sse_event("Hel"), sse_event("lo"));
    // Split mid-line to exercise buffering.
    let (a, b) = wire.split_at(17);

    let mut buffer = String::new();
    let mut fragments = Vec::new();
    for chunk in [a, b] {
        buffer.push_str(chunk);
        while let Some(line) = next_line(&mut buffer) {
            if let Some(fragment) = sse_fragment(&line) {
                fragments.push(fragment);
            }
        }
    }

    assert_eq!(fragments, vec!["Hel".to_owned(), "lo".to_owned()]);
    assert_eq!(fragments.concat(), "Hello");
}

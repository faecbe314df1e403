use super::*;
use serde_json::json;

fn text_envelope(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }
        ]
    })
    .to_string()
}

// =========================================================================
// parse_text_response
// =========================================================================

#[test]
fn text_parts_are_concatenated() {
    let raw = json!({
        "candidates": [
            { "content": { "parts": [{ "text": "Hel" }, { "text": "lo" }] } }
        ]
    })
    .to_string();
    assert_eq!(parse_text_response(&raw).unwrap(), "Hello");
}

#[test]
fn missing_candidates_is_empty_response() {
    let result = parse_text_response("{}");
    assert!(matches!(result, Err(GatewayError::EmptyResponse)));
}

#[test]
fn blank_text_is_empty_response() {
    let raw = text_envelope("   ");
    assert!(matches!(parse_text_response(&raw), Err(GatewayError::EmptyResponse)));
}

#[test]
fn invalid_envelope_is_parse_error() {
    let result = parse_text_response("not json");
    assert!(matches!(result, Err(GatewayError::Parse { .. })));
}

// =========================================================================
// parse_plan_payload
// =========================================================================

#[test]
fn plan_steps_arrive_sorted() {
    // Steps deliberately out of order: 2 then 1.
    let payload = json!({
        "total_power_consumption_kwh": 3.0,
        "power_consumption_breakdown": [{ "task": "sanding", "kwh": 3.0 }],
        "steps": [
            { "step": 2, "title": "Assemble", "description": "…" },
            { "step": 1, "title": "Cut", "description": "…" }
        ]
    })
    .to_string();

    let plan = parse_plan_payload(&payload).unwrap();
    let order: Vec<u32> = plan.steps.iter().map(|s| s.step).collect();
    assert_eq!(order, vec![1, 2]);
    assert_eq!(plan.steps[0].title, "Cut");
}

#[test]
fn plan_from_fenced_payload_parses() {
    let payload = "```json\n{\"total_power_consumption_kwh\":1.0,\"power_consumption_breakdown\":[],\"steps\":[]}\n```";
    let plan = parse_plan_payload(payload).unwrap();
    assert!((plan.total_power_consumption_kwh - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_plan_payload_fails_rather_than_defaulting() {
    assert!(matches!(parse_plan_payload(""), Err(GatewayError::EmptyResponse)));
}

#[test]
fn shape_mismatch_is_parse_error() {
    // An array where the plan object should be.
    let result = parse_plan_payload("[1, 2, 3]");
    assert!(matches!(result, Err(GatewayError::Parse { .. })));
}

// =========================================================================
// parse_image_response
// =========================================================================

#[test]
fn image_bytes_and_mime_are_extracted() {
    let raw = json!({
        "predictions": [
            { "bytesBase64Encoded": "QUJD", "mimeType": "image/png" }
        ]
    })
    .to_string();
    let image = parse_image_response(&raw).unwrap();
    assert_eq!(image.base64, "QUJD");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data_url(), "data:image/png;base64,QUJD");
}

#[test]
fn missing_mime_defaults_to_jpeg() {
    let raw = json!({ "predictions": [{ "bytesBase64Encoded": "QUJD" }] }).to_string();
    let image = parse_image_response(&raw).unwrap();
    assert_eq!(image.mime_type, "image/jpeg");
}

#[test]
fn no_predictions_is_empty_response() {
    assert!(matches!(parse_image_response("{}"), Err(GatewayError::EmptyResponse)));
}

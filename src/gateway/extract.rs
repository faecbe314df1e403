//! JSON payload extraction from model text.
//!
//! Models sometimes wrap their JSON in a fenced code block despite the
//! declared response mime type. Decoding tries the raw text first, then the
//! first fenced block, and only then fails — keeping the offending text for
//! diagnostics.

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

use serde::de::DeserializeOwned;

use super::types::GatewayError;

/// Decode a model text payload into `T`.
///
/// # Errors
///
/// [`GatewayError::EmptyResponse`] when the payload is blank;
/// [`GatewayError::Parse`] when neither the raw text nor a fenced block
/// deserializes into `T`.
pub fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T, GatewayError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let direct = serde_json::from_str::<T>(trimmed);
    let message = match direct {
        Ok(value) => return Ok(value),
        Err(e) => e.to_string(),
    };

    if let Some(inner) = fenced_block(trimmed) {
        if let Ok(value) = serde_json::from_str::<T>(inner) {
            return Ok(value);
        }
    }

    Err(GatewayError::Parse { message, payload: raw.to_owned() })
}

/// Contents of the first ``` fence, with any language tag on the opening
/// line skipped. `None` when there is no complete fence.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip the language tag (e.g. ```json) through the end of the line.
    let body_start = after_fence.find('\n').map_or(after_fence.len(), |i| i + 1);
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

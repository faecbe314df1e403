//! Streaming conversational session.
//!
//! The session holds the running message history and the persona directive.
//! `send` POSTs the whole history to the streaming endpoint and surfaces the
//! reply as incremental fragments: chunks are buffered into SSE lines, each
//! `data:` line carries one fragment. Line splitting and fragment extraction
//! are pure functions so the streaming path tests natively.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use futures::StreamExt;
use serde_json::{Value, json};

use crate::i18n::Locale;

use super::client::GeminiClient;
use super::prompts;
use super::types::GatewayError;

#[derive(Debug, Clone)]
struct Turn {
    role: &'static str,
    text: String,
}

pub struct ChatSession {
    client: GeminiClient,
    locale: Locale,
    history: Vec<Turn>,
}

impl ChatSession {
    /// A fresh session with the workshop persona in the given locale.
    pub fn new(client: GeminiClient, locale: Locale) -> Self {
        Self { client, locale, history: Vec::new() }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Send a user message and stream the reply.
    ///
    /// `on_fragment` fires once per incoming fragment, in order, until the
    /// model finishes. The complete reply is appended to the session history
    /// and returned.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success statuses surface as
    /// `Request`/`Status`; a stream that ends without any text is
    /// `EmptyResponse`. The user turn stays in the history either way.
    pub async fn send<F>(&mut self, text: &str, mut on_fragment: F) -> Result<String, GatewayError>
    where
        F: FnMut(&str),
    {
        self.history.push(Turn { role: "user", text: text.to_owned() });

        let config = self.client.config();
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            config.base_url, config.text_model, config.api_key
        );
        let contents: Vec<Value> = self
            .history
            .iter()
            .map(|turn| json!({ "role": turn.role, "parts": [{ "text": turn.text }] }))
            .collect();
        let body = json!({
            "contents": contents,
            "systemInstruction": { "parts": [{ "text": prompts::persona(self.locale) }] }
        });

        let response = self
            .client
            .http()
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut reply = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| GatewayError::Request(e.to_string()))?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line) = next_line(&mut buffer) {
                if let Some(fragment) = sse_fragment(&line) {
                    reply.push_str(&fragment);
                    on_fragment(&fragment);
                }
            }
        }

        // A final line may arrive without a trailing newline.
        if !buffer.trim().is_empty() {
            let line = std::mem::take(&mut buffer);
            if let Some(fragment) = sse_fragment(&line) {
                reply.push_str(&fragment);
                on_fragment(&fragment);
            }
        }

        if reply.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }

        self.history.push(Turn { role: "model", text: reply.clone() });
        Ok(reply)
    }
}

// =============================================================================
// SSE PARSING
// =============================================================================

/// Pop one complete line off the front of the buffer, `\r` stripped.
fn next_line(buffer: &mut String) -> Option<String> {
    let end = buffer.find('\n')?;
    let line = buffer[..end].trim_end_matches('\r').to_owned();
    buffer.drain(..=end);
    Some(line)
}

/// Text fragment carried by one SSE line, if any. Non-`data:` lines, the
/// terminator, and payloads without candidate text yield `None`.
fn sse_fragment(line: &str) -> Option<String> {
    let payload = line.trim().strip_prefix("data:")?.trim_start();
    if payload == "[DONE]" {
        return None;
    }

    let value: Value = serde_json::from_str(payload).ok()?;
    let parts = value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let fragment: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if fragment.is_empty() { None } else { Some(fragment) }
}

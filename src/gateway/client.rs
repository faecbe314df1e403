//! Gemini REST client.
//!
//! Thin HTTP wrappers around `generateContent` (schema-constrained JSON) and
//! the image model's `predict`. Pure parsing lives in the `parse_*` functions
//! for testability; the network side only moves bytes.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use futures::future::join_all;
use serde_json::{Value, json};

use crate::config::GatewayConfig;
use crate::i18n::Locale;
use crate::state::inventory::Material;
use crate::state::workshop::Difficulty;

use super::extract::decode_payload;
use super::prompts;
use super::types::{GatewayError, GeneratedImage, ProjectPlan, Suggestion};

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GeminiClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Generate project suggestions for the inventory, then fan out one
    /// image request per suggestion. Image calls run concurrently and are
    /// joined before returning; a failed image only costs that suggestion
    /// its preview.
    ///
    /// # Errors
    ///
    /// Propagates transport errors and `EmptyResponse`/`Parse` from the
    /// suggestion payload. Image failures never fail the batch.
    pub async fn fetch_suggestions(
        &self,
        materials: &[Material],
        difficulty: Difficulty,
        locale: Locale,
    ) -> Result<Vec<Suggestion>, GatewayError> {
        let prompt = prompts::build_suggestions_prompt(materials, difficulty, locale);
        let payload = self.generate_text(&prompt, prompts::suggestions_schema()).await?;
        let mut suggestions: Vec<Suggestion> = decode_payload(&payload)?;

        let images = join_all(
            suggestions
                .iter()
                .map(|s| self.generate_image(prompts::build_image_prompt(s))),
        )
        .await;

        for (suggestion, image) in suggestions.iter_mut().zip(images) {
            match image {
                Ok(image) => suggestion.image = Some(image),
                Err(e) => log::warn!("image generation failed for suggestion {}: {e}", suggestion.id),
            }
        }

        Ok(suggestions)
    }

    /// Fetch the fabrication plan for a chosen suggestion. Steps come back
    /// sorted ascending by step number.
    ///
    /// # Errors
    ///
    /// Transport errors, `EmptyResponse`, or `Parse` on a malformed payload.
    pub async fn fetch_plan(&self, suggestion: &Suggestion, locale: Locale) -> Result<ProjectPlan, GatewayError> {
        let prompt = prompts::build_plan_prompt(suggestion, locale);
        let payload = self.generate_text(&prompt, prompts::plan_schema()).await?;
        parse_plan_payload(&payload)
    }

    /// One image, 16:9 JPEG, from the image model.
    ///
    /// # Errors
    ///
    /// Transport errors, or `EmptyResponse` when no image came back.
    pub async fn generate_image(&self, prompt: String) -> Result<GeneratedImage, GatewayError> {
        let url = format!(
            "{}/models/{}:predict?key={}",
            self.config.base_url, self.config.image_model, self.config.api_key
        );
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "16:9",
                "outputMimeType": "image/jpeg"
            }
        });
        let raw = self.post_json(&url, &body).await?;
        parse_image_response(&raw)
    }

    /// Schema-constrained text generation; returns the raw text payload.
    async fn generate_text(&self, prompt: &str, schema: Value) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.text_model, self.config.api_key
        );
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });
        let raw = self.post_json(&url, &body).await?;
        parse_text_response(&raw)
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(GatewayError::Status { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(serde::Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(serde::Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(serde::Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Concatenate all candidate text parts; an absent or blank text payload is
/// a failure, never a default.
fn parse_text_response(raw: &str) -> Result<String, GatewayError> {
    let api: GenerateResponse = serde_json::from_str(raw)
        .map_err(|e| GatewayError::Parse { message: e.to_string(), payload: raw.to_owned() })?;

    let text: String = api
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|content| content.parts)
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(text)
}

/// Decode a plan payload and sort its steps ascending by step number.
pub(crate) fn parse_plan_payload(payload: &str) -> Result<ProjectPlan, GatewayError> {
    let mut plan: ProjectPlan = decode_payload(payload)?;
    plan.steps.sort_by_key(|s| s.step);
    Ok(plan)
}

fn parse_image_response(raw: &str) -> Result<GeneratedImage, GatewayError> {
    let api: PredictResponse = serde_json::from_str(raw)
        .map_err(|e| GatewayError::Parse { message: e.to_string(), payload: raw.to_owned() })?;

    api.predictions
        .into_iter()
        .find_map(|p| {
            p.bytes_base64_encoded.map(|base64| GeneratedImage {
                base64,
                mime_type: p.mime_type.unwrap_or_else(|| "image/jpeg".to_owned()),
            })
        })
        .ok_or(GatewayError::EmptyResponse)
}

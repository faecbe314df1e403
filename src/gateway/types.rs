//! Gateway wire types and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The build carried no API credential.
    #[error("missing API key: GEMINI_API_KEY was not set at build time")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, aborted fetch).
    #[error("API request failed: {0}")]
    Request(String),

    /// The service answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The model returned no text at all.
    #[error("model returned no text")]
    EmptyResponse,

    /// The model text was not valid JSON, even after fenced-block extraction.
    /// The offending payload is retained for diagnostics.
    #[error("model payload parse failed: {message}")]
    Parse { message: String, payload: String },
}

// =============================================================================
// DOMAIN PAYLOADS
// =============================================================================

/// One AI-proposed upcycling project.
///
/// The `id` is supplied by the model and treated as opaque; it is only
/// guaranteed distinct within one suggestion batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub materials_required: Vec<MaterialRequired>,
    /// Attached after the per-suggestion image call; absent when that call
    /// failed or has not run.
    #[serde(skip)]
    pub image: Option<GeneratedImage>,
}

/// A material line inside a suggestion. Informational only — never checked
/// against the actual inventory quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRequired {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Detailed build protocol and power budget for a chosen suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub total_power_consumption_kwh: f64,
    pub power_consumption_breakdown: Vec<PowerDraw>,
    pub steps: Vec<PlanStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerDraw {
    pub task: String,
    pub kwh: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// An encoded image payload from the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub base64: String,
    pub mime_type: String,
}

impl GeneratedImage {
    /// `data:` URL usable directly as an `img src`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

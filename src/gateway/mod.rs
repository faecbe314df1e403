//! AI gateway — the only component with a network dependency.
//!
//! Wraps the Google Generative Language REST API: schema-constrained text
//! generation for suggestions and fabrication plans, one image generation
//! per suggestion, and a streaming chat session. HTTP lives in `client` and
//! `chat`; parsing is split into pure functions so it tests natively.

pub mod chat;
pub mod client;
pub mod extract;
pub mod prompts;
pub mod types;

pub use chat::ChatSession;
pub use client::GeminiClient;
pub use types::{GatewayError, GeneratedImage, MaterialRequired, PlanStep, PowerDraw, ProjectPlan, Suggestion};

//! Gateway configuration resolved at build time.
//!
//! A browser bundle has no process environment, so the API credential and
//! optional model overrides are baked in with `option_env!` when the WASM is
//! compiled. A missing key is a typed error the UI can surface, not a panic.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::gateway::GatewayError;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl GatewayConfig {
    /// Config with default endpoint and model identifiers.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
        }
    }

    /// Build config from compile-time environment.
    ///
    /// Required: `GEMINI_API_KEY`. Optional overrides: `SCRAPFORGE_API_BASE_URL`,
    /// `SCRAPFORGE_TEXT_MODEL`, `SCRAPFORGE_IMAGE_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingApiKey`] when the build carried no key.
    pub fn from_build_env() -> Result<Self, GatewayError> {
        let api_key = option_env!("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(GatewayError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(url) = option_env!("SCRAPFORGE_API_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(model) = option_env!("SCRAPFORGE_TEXT_MODEL") {
            config.text_model = model.to_owned();
        }
        if let Some(model) = option_env!("SCRAPFORGE_IMAGE_MODEL") {
            config.image_model = model.to_owned();
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_owned();
        self
    }
}

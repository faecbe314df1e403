//! Prompt builders and response schemas for the generative calls.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use std::fmt::Write;

use serde_json::{Value, json};

use crate::i18n::Locale;
use crate::state::inventory::Material;
use crate::state::workshop::Difficulty;
use crate::gateway::types::Suggestion;

/// Declared ceiling for a project's total power draw, embedded in both
/// generation prompts.
pub const POWER_CEILING_KWH: f64 = 15.0;

// =============================================================================
// SUGGESTIONS
// =============================================================================

pub fn build_suggestions_prompt(materials: &[Material], difficulty: Difficulty, locale: Locale) -> String {
    let mut prompt = String::from(
        "You are an expert in upcycling and small-scale fabrication. \
         A user has the following waste materials available:\n",
    );

    for material in materials {
        let _ = writeln!(prompt, "- {} {} of {}", material.quantity, material.unit, material.name);
    }

    let _ = write!(
        prompt,
        "\nPropose 3 to 6 {} projects that can be fabricated from a subset of \
         these materials with common workshop tools. Each project's total power \
         draw for fabrication must stay under {POWER_CEILING_KWH} kWh. \
         For every project give a short id, a title, a one-paragraph description, \
         and the list of required materials with quantity and unit.\n\
         Respond in {} with a JSON array only.",
        difficulty.prompt_term(),
        locale.english_name(),
    );
    prompt
}

/// Gemini response schema for the suggestions call: an array of suggestion
/// objects, all fields required.
pub fn suggestions_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "materials_required": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "quantity": { "type": "NUMBER" },
                            "unit": { "type": "STRING" }
                        },
                        "required": ["name", "quantity", "unit"]
                    }
                }
            },
            "required": ["id", "title", "description", "materials_required"]
        }
    })
}

pub fn build_image_prompt(suggestion: &Suggestion) -> String {
    format!(
        "A clean studio photograph of \"{}\", a DIY upcycling project built from \
         reclaimed waste materials: {}. Neutral background, soft light, no people, no text.",
        suggestion.title, suggestion.description,
    )
}

// =============================================================================
// FABRICATION PLAN
// =============================================================================

pub fn build_plan_prompt(suggestion: &Suggestion, locale: Locale) -> String {
    let mut prompt = format!(
        "Write a scientifically detailed manufacturing protocol for the upcycling \
         project \"{}\": {}\n\nMaterials on hand:\n",
        suggestion.title, suggestion.description,
    );

    for req in &suggestion.materials_required {
        let _ = writeln!(prompt, "- {} {} of {}", req.quantity, req.unit, req.name);
    }

    let _ = write!(
        prompt,
        "\nNumber every step and give each a title and a precise description \
         (tools, measurements, safety notes). Also break down the power \
         consumption per fabrication task in kWh; the total must not exceed \
         {POWER_CEILING_KWH} kWh.\nRespond in {} with a JSON object only.",
        locale.english_name(),
    );
    prompt
}

/// Gemini response schema for the plan call: one object with the power
/// breakdown and the ordered step list.
pub fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "total_power_consumption_kwh": { "type": "NUMBER" },
            "power_consumption_breakdown": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "task": { "type": "STRING" },
                        "kwh": { "type": "NUMBER" }
                    },
                    "required": ["task", "kwh"]
                }
            },
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "step": { "type": "INTEGER" },
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["step", "title", "description"]
                }
            }
        },
        "required": ["total_power_consumption_kwh", "power_consumption_breakdown", "steps"]
    })
}

// =============================================================================
// ASSISTANT PERSONA
// =============================================================================

pub fn persona(locale: Locale) -> String {
    format!(
        "You are Scrappy, the resident assistant of the ScrapForge workshop. \
         Your mission is reducing landfill by turning waste into working projects, \
         and you take that mission seriously — everything else you treat with dry, \
         understated humor. Keep answers short, practical, and focused on \
         reuse, repair, and fabrication.\nAlways respond in {}.",
        locale.english_name(),
    )
}

use super::*;

fn materials() -> Vec<Material> {
    vec![
        Material { id: 1, name: "Plastic bottles".into(), quantity: 6.0, unit: "pcs".into() },
        Material { id: 2, name: "Copper wire".into(), quantity: 2.5, unit: "m".into() },
    ]
}

fn suggestion() -> Suggestion {
    Suggestion {
        id: "s1".into(),
        title: "Bottle drip irrigator".into(),
        description: "Slow-release waterer from inverted bottles.".into(),
        materials_required: vec![crate::gateway::types::MaterialRequired {
            name: "Plastic bottles".into(),
            quantity: 4.0,
            unit: "pcs".into(),
        }],
        image: None,
    }
}

// =========================================================================
// suggestion prompt
// =========================================================================

#[test]
fn suggestion_prompt_embeds_inventory_difficulty_locale_and_ceiling() {
    let prompt = build_suggestions_prompt(&materials(), Difficulty::Easy, Locale::En);
    assert!(prompt.contains("6 pcs of Plastic bottles"));
    assert!(prompt.contains("2.5 m of Copper wire"));
    assert!(prompt.contains("beginner-friendly"));
    assert!(prompt.contains("15 kWh"));
    assert!(prompt.contains("Respond in English"));
}

#[test]
fn suggestion_prompt_targets_the_other_locale() {
    let prompt = build_suggestions_prompt(&materials(), Difficulty::Hard, Locale::Ar);
    assert!(prompt.contains("advanced"));
    assert!(prompt.contains("Respond in Arabic"));
}

#[test]
fn suggestions_schema_requires_all_fields() {
    let schema = suggestions_schema();
    assert_eq!(schema["type"], "ARRAY");
    let required = schema["items"]["required"].as_array().unwrap();
    for field in ["id", "title", "description", "materials_required"] {
        assert!(required.iter().any(|v| v == field), "missing required field {field}");
    }
}

// =========================================================================
// plan prompt
// =========================================================================

#[test]
fn plan_prompt_embeds_project_and_ceiling() {
    let prompt = build_plan_prompt(&suggestion(), Locale::En);
    assert!(prompt.contains("Bottle drip irrigator"));
    assert!(prompt.contains("4 pcs of Plastic bottles"));
    assert!(prompt.contains("15 kWh"));
    assert!(prompt.contains("Respond in English"));
}

#[test]
fn plan_schema_declares_power_and_steps() {
    let schema = plan_schema();
    assert_eq!(schema["type"], "OBJECT");
    let required = schema["required"].as_array().unwrap();
    for field in ["total_power_consumption_kwh", "power_consumption_breakdown", "steps"] {
        assert!(required.iter().any(|v| v == field), "missing required field {field}");
    }
    assert_eq!(schema["properties"]["steps"]["items"]["properties"]["step"]["type"], "INTEGER");
}

// =========================================================================
// image prompt & persona
// =========================================================================

#[test]
fn image_prompt_describes_the_project() {
    let prompt = build_image_prompt(&suggestion());
    assert!(prompt.contains("Bottle drip irrigator"));
    assert!(prompt.contains("no text"));
}

#[test]
fn persona_pins_the_response_language() {
    assert!(persona(Locale::En).contains("Always respond in English."));
    assert!(persona(Locale::Ar).contains("Always respond in Arabic."));
    assert!(persona(Locale::En).contains("Scrappy"));
}

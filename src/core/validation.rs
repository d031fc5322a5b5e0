//! Create-payload validation for superheroes.
//!
//! Every rule is evaluated, so a bad payload reports all of its problems in
//! one response rather than only the first.

use crate::core::CreateSuperhero;
use crate::domain::model::{MAX_HUMILITY_SCORE, MIN_HUMILITY_SCORE};
use crate::utils::error::{HeroError, Result};
use serde_json::{Map, Value};

pub const FIELD_NAME: &str = "name";
pub const FIELD_SUPERPOWER: &str = "superpower";
pub const FIELD_HUMILITY_SCORE: &str = "humilityScore";

const KNOWN_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_SUPERPOWER, FIELD_HUMILITY_SCORE];

pub fn validate_create_payload(payload: &Value) -> Result<CreateSuperhero> {
    let Some(object) = payload.as_object() else {
        return Err(HeroError::validation(vec![
            "request body must be a JSON object".to_string(),
        ]));
    };

    let mut messages = Vec::new();

    let name = required_string(object, FIELD_NAME, &mut messages);
    let superpower = required_string(object, FIELD_SUPERPOWER, &mut messages);
    let humility_score = humility_score(object.get(FIELD_HUMILITY_SCORE), &mut messages);

    for key in object.keys() {
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            messages.push(format!("property {} should not exist", key));
        }
    }

    match (name, superpower, humility_score) {
        (Some(name), Some(superpower), Some(humility_score)) if messages.is_empty() => {
            Ok(CreateSuperhero {
                name,
                superpower,
                humility_score,
            })
        }
        _ => {
            tracing::debug!("Rejected superhero payload: {:?}", messages);
            Err(HeroError::validation(messages))
        }
    }
}

/// Type and emptiness are separate rules: `123` is not a string but is not empty,
/// while a missing field breaks both.
fn required_string(
    object: &Map<String, Value>,
    field: &str,
    messages: &mut Vec<String>,
) -> Option<String> {
    let value = object.get(field);

    let as_str = value.and_then(Value::as_str);
    if as_str.is_none() {
        messages.push(format!("{} must be a string", field));
    }

    let empty = match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if empty {
        messages.push(format!("{} must not be empty", field));
    }

    match as_str {
        Some(s) if !empty => Some(s.to_string()),
        _ => None,
    }
}

fn humility_score(value: Option<&Value>, messages: &mut Vec<String>) -> Option<i64> {
    let number = value.and_then(Value::as_number);

    let is_integer = number
        .map(|n| n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0))
        .unwrap_or(false);
    if !is_integer {
        messages.push(format!("{} must be an integer number", FIELD_HUMILITY_SCORE));
    }

    // Bound rules only pass for actual numbers
    let numeric = number.and_then(|n| n.as_f64());
    let above_min = numeric.is_some_and(|f| f >= MIN_HUMILITY_SCORE as f64);
    let below_max = numeric.is_some_and(|f| f <= MAX_HUMILITY_SCORE as f64);
    if !above_min {
        messages.push(format!(
            "{} must not be less than {}",
            FIELD_HUMILITY_SCORE, MIN_HUMILITY_SCORE
        ));
    }
    if !below_max {
        messages.push(format!(
            "{} must not be greater than {}",
            FIELD_HUMILITY_SCORE, MAX_HUMILITY_SCORE
        ));
    }

    match numeric {
        Some(f) if is_integer && above_min && below_max => Some(f as i64),
        _ => None,
    }
}

/// Checks an already-typed record against the same rules, for records that
/// never travelled as JSON (configured seed data).
pub fn validate_superhero(hero: &crate::core::Superhero) -> Result<()> {
    let payload = serde_json::to_value(hero)?;
    validate_create_payload(&payload).map(|_| ())
}

use serde::{Deserialize, Serialize};

pub const MIN_HUMILITY_SCORE: i64 = 1;
pub const MAX_HUMILITY_SCORE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Superhero {
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
}

impl Superhero {
    pub fn new(name: impl Into<String>, superpower: impl Into<String>, humility_score: i64) -> Self {
        Self {
            name: name.into(),
            superpower: superpower.into(),
            humility_score,
        }
    }
}

/// A create request that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSuperhero {
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
}

impl From<CreateSuperhero> for Superhero {
    fn from(value: CreateSuperhero) -> Self {
        Superhero {
            name: value.name,
            superpower: value.superpower,
            humility_score: value.humility_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case() {
        let hero = Superhero::new("Loki", "Illusions", 5);
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Loki", "superpower": "Illusions", "humilityScore": 5})
        );
    }
}

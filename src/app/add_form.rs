use crate::core::{HeroApi, Superhero};
use crate::domain::model::{MAX_HUMILITY_SCORE, MIN_HUMILITY_SCORE};
use crate::utils::error::HeroError;

pub const DEFAULT_HUMILITY_SCORE: i64 = 5;
pub const INCOMPLETE_FORM_MESSAGE: &str =
    "All fields are required, and humility must be between 1-10.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add a Marvel hero.";

/// Form state for adding a hero. Mirrors the server rules so obvious mistakes never leave the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
    error: Option<String>,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            superpower: String::new(),
            humility_score: DEFAULT_HUMILITY_SCORE,
            error: None,
        }
    }
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(
        name: impl Into<String>,
        superpower: impl Into<String>,
        humility_score: i64,
    ) -> Self {
        Self {
            name: name.into(),
            superpower: superpower.into(),
            humility_score,
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.superpower.is_empty()
            && (MIN_HUMILITY_SCORE..=MAX_HUMILITY_SCORE).contains(&self.humility_score)
    }

    /// Returns `true` when the hero was created and the list should refetch.
    pub async fn submit<A: HeroApi + ?Sized>(&mut self, api: &A) -> bool {
        if !self.is_valid() {
            self.error = Some(INCOMPLETE_FORM_MESSAGE.to_string());
            return false;
        }

        let hero = Superhero::new(
            self.name.clone(),
            self.superpower.clone(),
            self.humility_score,
        );

        match api.add_superhero(&hero).await {
            Ok(()) => {
                tracing::info!("Added '{}'", hero.name);
                self.reset();
                true
            }
            Err(e) => {
                tracing::warn!("Adding '{}' failed: {}", hero.name, e);
                self.error = Some(failure_message(&e));
                false
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn failure_message(error: &HeroError) -> String {
    match error {
        HeroError::RequestFailed { details, .. } if !details.is_empty() => details.join(", "),
        _ => ADD_FAILED_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests_support::FakeApi;

    #[test]
    fn test_default_score() {
        let form = AddForm::new();
        assert_eq!(form.humility_score, 5);
        assert!(form.error().is_none());
        assert!(!form.is_valid());
    }

    #[tokio::test]
    async fn test_local_validation_blocks_submit() {
        let api = FakeApi::with_heroes(vec![]);

        for mut form in [
            AddForm::with_values("", "Agility", 5),
            AddForm::with_values("Spider-Man", "", 5),
            AddForm::with_values("Spider-Man", "Agility", 0),
            AddForm::with_values("Spider-Man", "Agility", 11),
        ] {
            assert!(!form.submit(&api).await);
            assert_eq!(form.error(), Some(INCOMPLETE_FORM_MESSAGE));
        }

        assert_eq!(api.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_submit_clears_form() {
        let api = FakeApi::with_heroes(vec![]);
        let mut form = AddForm::with_values("Loki", "Illusions", 3);

        assert!(form.submit(&api).await);

        assert_eq!(form, AddForm::default());
        assert_eq!(api.add_calls(), 1);
        assert_eq!(
            api.fetch_superheroes().await.unwrap(),
            vec![Superhero::new("Loki", "Illusions", 3)]
        );
    }

    #[tokio::test]
    async fn test_server_failure_shows_generic_message() {
        let api = FakeApi::failing();
        let mut form = AddForm::with_values("Loki", "Illusions", 3);

        assert!(!form.submit(&api).await);

        assert_eq!(form.error(), Some(ADD_FAILED_MESSAGE));
        assert_eq!(form.name, "Loki");
    }

    #[test]
    fn test_failure_message_prefers_server_details() {
        let error = HeroError::RequestFailed {
            message: "Failed to add superhero".to_string(),
            details: vec![
                "property villain should not exist".to_string(),
                "name must not be empty".to_string(),
            ],
        };
        assert_eq!(
            failure_message(&error),
            "property villain should not exist, name must not be empty"
        );
    }
}

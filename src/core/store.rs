use crate::core::{Superhero, SuperheroRepository};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-lifetime superhero list. Nothing is written to disk.
#[derive(Debug, Default)]
pub struct InMemorySuperheroStore {
    heroes: RwLock<Vec<Superhero>>,
}

impl InMemorySuperheroStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Superhero>) -> Self {
        Self {
            heroes: RwLock::new(records),
        }
    }
}

#[async_trait]
impl SuperheroRepository for InMemorySuperheroStore {
    async fn append(&self, hero: Superhero) -> Superhero {
        let mut heroes = self.heroes.write().await;
        heroes.push(hero.clone());
        tracing::debug!(
            "Stored superhero '{}' ({} total)",
            hero.name,
            heroes.len()
        );
        hero
    }

    async fn list_sorted_by_humility(&self) -> Vec<Superhero> {
        let mut snapshot = self.heroes.read().await.clone();
        // sort_by is stable, so ties stay in insertion order
        snapshot.sort_by(|a, b| b.humility_score.cmp(&a.humility_score));
        snapshot
    }

    async fn len(&self) -> usize {
        self.heroes.read().await.len()
    }
}

use crate::domain::model::Superhero;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SuperheroRepository: Send + Sync {
    /// Stores the record as given. Field constraints are checked upstream, not here.
    async fn append(&self, hero: Superhero) -> Superhero;

    /// Snapshot of every record, most humble first; equal scores keep insertion order.
    async fn list_sorted_by_humility(&self) -> Vec<Superhero>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn allowed_origins(&self) -> &[String];
    fn seed_heroes(&self) -> &[Superhero];
}

/// What the client UI needs from the API; implemented over HTTP by `ApiClient`.
#[async_trait]
pub trait HeroApi: Send + Sync {
    async fn fetch_superheroes(&self) -> Result<Vec<Superhero>>;
    async fn add_superhero(&self, hero: &Superhero) -> Result<()>;
}

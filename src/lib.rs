pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::client::ApiClient;
pub use adapters::http::{build_app, build_router, AppState, CorsPolicy};
pub use config::{CliConfig, ServerSettings};
pub use crate::core::{store::InMemorySuperheroStore, Superhero, SuperheroRepository};
pub use utils::error::{HeroError, Result};

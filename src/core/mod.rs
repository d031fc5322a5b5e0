pub mod store;
pub mod validation;

pub use crate::domain::model::{CreateSuperhero, Superhero};
pub use crate::domain::ports::{ConfigProvider, HeroApi, SuperheroRepository};
pub use crate::utils::error::Result;

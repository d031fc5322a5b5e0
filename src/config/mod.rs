pub mod toml_config;

use crate::core::validation::validate_superhero;
use crate::core::{ConfigProvider, Superhero};
use crate::utils::error::{HeroError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_origin, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

pub fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
}

/// Records the server starts with unless seeding is disabled or overridden.
pub fn default_seed_heroes() -> Vec<Superhero> {
    vec![
        Superhero::new("Spider-Man", "Agility", 9),
        Superhero::new("Iron Man", "Technology", 7),
        Superhero::new("Thor", "Thunder", 8),
        Superhero::new("Venom", "Symbiote", 3),
        Superhero::new("Loki", "Illusions", 2),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "humble-heroes")]
#[command(about = "In-memory superhero API, sorted by humility")]
pub struct CliConfig {
    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Comma-separated list of origins allowed by CORS
    #[arg(long, value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Start with an empty store
    #[arg(long)]
    pub no_seed: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Effective server settings after merging defaults, the optional TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub seed_heroes: Vec<Superhero>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: default_allowed_origins(),
            seed_heroes: default_seed_heroes(),
        }
    }
}

impl ServerSettings {
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Self::from_file_config(&TomlConfig::from_file(path)?)
            }
            None => Self::default(),
        };

        if let Some(host) = &cli.host {
            settings.host = host.clone();
        }
        if let Some(port) = cli.port {
            settings.port = port;
        }
        if !cli.allowed_origins.is_empty() {
            settings.allowed_origins = cli.allowed_origins.clone();
        }
        if cli.no_seed {
            settings.seed_heroes.clear();
        }

        Ok(settings)
    }

    fn from_file_config(file: &TomlConfig) -> Self {
        Self {
            host: file.host().to_string(),
            port: file.port(),
            allowed_origins: file.allowed_origins().to_vec(),
            seed_heroes: file.seed_heroes().to_vec(),
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    fn seed_heroes(&self) -> &[Superhero] {
        &self.seed_heroes
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        validate_seed_heroes(&self.seed_heroes)?;
        for origin in &self.allowed_origins {
            validate_origin("cors.allowed_origins", origin)?;
        }
        Ok(())
    }
}

/// Seeds go through the same rules as POST bodies.
fn validate_seed_heroes(heroes: &[Superhero]) -> Result<()> {
    for (index, hero) in heroes.iter().enumerate() {
        if let Err(e) = validate_superhero(hero) {
            return Err(HeroError::InvalidConfigValueError {
                field: format!("seed[{}]", index),
                value: hero.name.clone(),
                reason: e.messages().join(", "),
            });
        }
    }
    Ok(())
}

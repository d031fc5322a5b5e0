use crate::config::{default_allowed_origins, default_seed_heroes, DEFAULT_HOST, DEFAULT_PORT};
use crate::core::Superhero;
use crate::utils::error::{HeroError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Parsed configuration file. Checked only after it is merged into `ServerSettings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub cors: CorsSection,
    /// `None` keeps the built-in heroes; an explicit empty list starts empty.
    pub seed: Option<Vec<Superhero>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsSection {
    pub allowed_origins: Option<Vec<String>>,
}

impl TomlConfig {
    /// Loads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HeroError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let mut config: TomlConfig = toml::from_str(&processed_content)?;
        config.fill_defaults();
        Ok(config)
    }

    /// Expands `${VAR}` from the environment. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    fn fill_defaults(&mut self) {
        if self.cors.allowed_origins.is_none() {
            self.cors.allowed_origins = Some(default_allowed_origins());
        }
        if self.seed.is_none() {
            self.seed = Some(default_seed_heroes());
        }
    }

    pub fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn allowed_origins(&self) -> &[String] {
        // fill_defaults guarantees Some after parsing
        self.cors.allowed_origins.as_deref().unwrap_or(&[])
    }

    pub fn seed_heroes(&self) -> &[Superhero] {
        self.seed.as_deref().unwrap_or(&[])
    }
}

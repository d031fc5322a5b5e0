use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation failed: {}", messages.join(", "))]
    Validation { messages: Vec<String> },

    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },

    #[error("Not allowed by CORS for origin: {origin}")]
    CorsRejected { origin: String },

    #[error("{message}")]
    RequestFailed {
        message: String,
        details: Vec<String>,
    },
}

impl HeroError {
    pub fn validation(messages: Vec<String>) -> Self {
        HeroError::Validation { messages }
    }

    /// Messages carried by the error that a user can act on, one per line.
    pub fn messages(&self) -> Vec<String> {
        match self {
            HeroError::Validation { messages } => messages.clone(),
            HeroError::RequestFailed { details, .. } if !details.is_empty() => details.clone(),
            other => vec![other.to_string()],
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HeroError::ApiError(e) if e.is_connect() => {
                "Could not reach the superhero API".to_string()
            }
            HeroError::ApiError(_) => "The superhero API request failed".to_string(),
            HeroError::IoError(e) => format!("File or network error: {}", e),
            HeroError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            HeroError::Validation { messages } => {
                format!("Invalid superhero: {}", messages.join(", "))
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HeroError::ApiError(_) | HeroError::RequestFailed { .. } => {
                "Check that the server is running and --api-url points at /superheroes"
            }
            HeroError::IoError(_) => "Check the path and that the port is not already in use",
            HeroError::TomlError(_) => "Fix the configuration file and try again",
            HeroError::InvalidConfigValueError { .. } => {
                "Correct the highlighted setting and try again"
            }
            HeroError::Validation { .. } => {
                "Provide a name, a superpower and a humility score between 1 and 10"
            }
            HeroError::MalformedBody { .. } => "Send a JSON object with Content-Type: application/json",
            HeroError::CorsRejected { .. } => "Add the origin to the allowed origins list",
            HeroError::SerializationError(_) => "The response was not the expected JSON shape",
        }
    }
}

pub type Result<T> = std::result::Result<T, HeroError>;

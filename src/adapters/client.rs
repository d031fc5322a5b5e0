use crate::adapters::http::error::ErrorBody;
use crate::core::{HeroApi, Superhero};
use crate::utils::error::{HeroError, Result};
use crate::utils::validation::{validate_url, Validate};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/superheroes";

const FETCH_FAILED: &str = "Failed to fetch superheroes";
const ADD_FAILED: &str = "Failed to add superhero";

/// Thin client for the `/superheroes` resource. No retries and no backoff:
/// any status outside 2xx is a single generic failure.
#[derive(Debug, Clone)]
pub struct ApiClient {
    api_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: Client::new(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn fetch_superheroes(&self) -> Result<Vec<Superhero>> {
        tracing::debug!("Making API request to: {}", self.api_url);
        let response = self.client.get(&self.api_url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(HeroError::RequestFailed {
                message: FETCH_FAILED.to_string(),
                details: vec![],
            });
        }

        let heroes = response.json::<Vec<Superhero>>().await?;
        Ok(heroes)
    }

    pub async fn add_superhero(&self, hero: &Superhero) -> Result<()> {
        tracing::debug!("Posting superhero '{}' to: {}", hero.name, self.api_url);
        let response = self.client.post(&self.api_url).json(hero).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if status.is_success() {
            return Ok(());
        }

        // Keep the server's reasons when it sent a validation body
        let details = if status == StatusCode::BAD_REQUEST {
            response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_default()
        } else {
            vec![]
        };

        Err(HeroError::RequestFailed {
            message: ADD_FAILED.to_string(),
            details,
        })
    }
}

#[async_trait]
impl HeroApi for ApiClient {
    async fn fetch_superheroes(&self) -> Result<Vec<Superhero>> {
        ApiClient::fetch_superheroes(self).await
    }

    async fn add_superhero(&self, hero: &Superhero) -> Result<()> {
        ApiClient::add_superhero(self, hero).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Validate for ApiClient {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)
    }
}

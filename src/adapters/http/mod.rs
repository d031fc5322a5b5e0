//! Axum HTTP boundary for the superhero API.
//!
//! Routes:
//! - `GET /` greeting
//! - `GET /superheroes` list, most humble first
//! - `POST /superheroes` validated create

pub mod cors;
pub mod error;
pub mod handlers;

use crate::core::store::InMemorySuperheroStore;
use crate::core::{ConfigProvider, SuperheroRepository};
use crate::utils::error::Result;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use cors::{CorsPolicy, ALLOWED_METHODS};

pub const SUPERHEROES_PATH: &str = "/superheroes";
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Shared handler state. The repository is injected so tests can build isolated apps.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn SuperheroRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn SuperheroRepository>) -> Self {
        Self { repository }
    }
}

pub fn build_router(state: AppState, cors: CorsPolicy) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            SUPERHEROES_PATH,
            get(handlers::list_superheroes).post(handlers::create_superhero),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(from_fn_with_state(cors, cors::cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the router from configuration, seeding a fresh store.
pub fn build_app<C: ConfigProvider + ?Sized>(config: &C) -> Router {
    let store = InMemorySuperheroStore::with_records(config.seed_heroes().to_vec());
    tracing::info!(
        "🦸 Store seeded with {} superheroes",
        config.seed_heroes().len()
    );

    build_router(
        AppState::new(Arc::new(store)),
        CorsPolicy::new(config.allowed_origins().to_vec()),
    )
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚀 Application is running on: http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

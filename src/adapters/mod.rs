// Adapters layer: concrete implementations for external systems (HTTP server, HTTP client).

pub mod client;
pub mod http;

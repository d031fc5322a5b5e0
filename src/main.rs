use clap::Parser;
use humble_heroes::adapters::http::{serve, shutdown_signal};
use humble_heroes::core::ConfigProvider;
use humble_heroes::utils::{logger, validation::Validate};
use humble_heroes::{build_app, CliConfig, ServerSettings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_server_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting humble-heroes API");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match ServerSettings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "🌐 CORS allowed origins: {}",
        settings.allowed_origins().join(", ")
    );

    let bind_address = settings.bind_address();
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Failed to bind {}: {}", bind_address, e);
            eprintln!("❌ Could not listen on {}: {}", bind_address, e);
            std::process::exit(2);
        }
    };

    let app = build_app(&settings);
    serve(listener, app, shutdown_signal()).await?;

    Ok(())
}

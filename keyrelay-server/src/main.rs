use color_eyre::eyre::Result;
use keyrelay::{ResolverService, Settings, build_clients};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Standalone host for the password resolvers
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = Settings::load()?;

    // Create remote-service clients
    let clients = build_clients(&config)?;
    let service = ResolverService::from_clients(clients);

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(config.application.address()).await?;
    tracing::info!("Starting resolver service...");

    service
        .run_standalone(listener, config.application.allowed_origins)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

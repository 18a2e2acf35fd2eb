use std::io;

use ticket_device::core::config::Config;
use ticket_device::features::ticket_device::handlers::run_session;
use ticket_device::TicketDeviceService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    // stdout carries the JSON responses, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: device={}, price={}",
        config.device.name,
        config.device.price
    );

    let service = TicketDeviceService::new(config.device.price)?;
    run_session(&service, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}

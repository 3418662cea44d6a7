//! Health Risk Screener - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Health Risk Screener v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting health screening service...");

    run_server(ServerConfig::default()).await?;

    Ok(())
}

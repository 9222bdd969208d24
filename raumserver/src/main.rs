use anyhow::{Context, Result};
use clap::Parser;
use raumkernel::{Kernel, MemoryKernel};
use raumserver::logging::init_logging;
use raumserver::{Args, Dispatcher, RaumServer};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate().context("Invalid arguments")?;

    init_logging(args.log_mode, args.log_level.as_deref()).context("Failed to initialize logging")?;

    let kernel = MemoryKernel::new(args.zone_specs()?);
    info!(
        "Welcome to raumserver v{} (raumkernel v{})",
        raumserver::VERSION,
        kernel.version()
    );

    debug!("Setting up raumkernel");
    kernel.init().await.context("Failed to initialize raumkernel")?;

    debug!("Starting HTTP server to receive requests");
    let config = args.server_config();
    let dispatcher = Dispatcher::new(&kernel, config.default_headers.clone());
    let server = RaumServer::start(&config, dispatcher)
        .await
        .context("Failed to start HTTP server")?;
    info!("Raumserver ready at {}", server.base_url());

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    info!("Shutting down");
    server.shutdown().await;
    Ok(())
}

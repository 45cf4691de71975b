mod config;
mod error;
mod routes;
mod web;

use tracing_subscriber::EnvFilter;

use config::Config;
use web::server::PageServer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!("Server is starting up...");

    let server = PageServer::bind(config.clone())?;
    tracing::info!(
        "Server is ready to receive connections on http://{} (routes from {})",
        server.local_addr()?,
        config.route_table_path.display()
    );

    server.run().await;
    Ok(())
}

//! # Site Server
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    if let Err(e) = start_server(config).await {
        tracing::error!("Server exited with error: {:#}", e);
        return Err(e);
    }
    Ok(())
}

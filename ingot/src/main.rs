//! The Ingot server binary.
use std::path::Path;

use ingot::IngotServer;
use ingot_core::config::ServerConfig;
use tokio::select;
use tokio::signal::ctrl_c;

const CONFIG_PATH: &str = "config/ingot_config.json5";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ingot::logger::init()?;

    let config = ServerConfig::load_or_create(Path::new(CONFIG_PATH))?;
    let server = IngotServer::new(config)?;
    server.start();

    select! {
        () = server.cancel_token.cancelled() => {}
        result = ctrl_c() => {
            if let Err(e) = result {
                log::error!("Failed to listen for Ctrl-C: {e}");
            }
            server.stop();
        }
    }

    log::info!("Server stopped");
    Ok(())
}

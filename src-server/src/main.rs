//! Planejaqui Server Binary

use std::path::Path;

use planejaqui_server::{serve, ServerConfig, CONFIG_FILE};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load(Path::new(CONFIG_FILE))?;

    rolling_logger::init_logger_with(&config.log_dir, "Planejaqui", config.logger_config())?;

    serve(config).await?;
    Ok(())
}

use address_service::core::configure::app::AppConfig;
use address_service::infrastructure::error::AppResult;
use address_service::core::http::server::AppServer;
use log::{error, info, LevelFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .filter_module("sqlx", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Info)
        .parse_default_env()
        .format_target(true)
        .init();

    let config = AppConfig::read()?;
    info!("Loaded configuration for profile: {}", config.profile);

    let server = AppServer::new(config).await?;
    info!("Starting server...");

    if let Err(e) = server.run().await {
        error!("HTTP Server error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

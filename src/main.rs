use anyhow::Context;
use tracing::{error, info};

use user_intake::adapter::config::AppConfig;
use user_intake::adapter::init::AppInitializer;
use user_intake::adapter::telemetry::init_tracing;
use user_intake::adapter::web::create_router::create_router;
use user_intake::error::ApplicationError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()
        .map_err(ApplicationError::from)
        .context("failed to load configuration")?;

    init_tracing(&config);

    run(config)
        .await
        .inspect_err(|err| error!(error = %err, "server stopped"))?;

    Ok(())
}

async fn run(config: AppConfig) -> Result<(), ApplicationError> {
    let address = config.address().to_string();
    info!(env = %config.env(), %address, "starting user intake service");

    let state = AppInitializer::initialize(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| ApplicationError::BindError {
            address: address.clone(),
            source,
        })?;
    info!(%address, "server running");

    axum::serve(listener, app)
        .await
        .map_err(ApplicationError::ServerError)
}

//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use mockable::DefaultEnv;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::session_config::BuildMode;
use backend::server::{app_config_from_env, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = app_config_from_env(&DefaultEnv::default(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    create_server(config)?.await
}

//! Process startup: configuration, logging, Rocket assembly

use crate::builder::{AppContext, ServerBuilder};
use crate::handlers::{health, session};
use anyhow::Context as _;
use gavel_infrastructure::config::loader::ConfigLoader;
use gavel_infrastructure::logging::{init_logging, log_config_loaded};
use rocket::{Build, Rocket, routes};
use std::path::Path;
use tracing::info;

/// Assemble the Rocket application over a built context
pub fn build_rocket(context: AppContext) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", context.config.server.host.clone()))
        .merge(("port", context.config.server.port));

    rocket::custom(figment).manage(context).mount(
        "/",
        routes![
            session::login,
            session::reissue,
            session::logout,
            health::live,
            health::ready,
        ],
    )
}

/// Load config, initialize logging, and run the server until shutdown
///
/// With `check_only` the process validates the configuration and exits
/// without binding a socket.
pub async fn run(config_path: Option<&Path>, check_only: bool) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("failed to load configuration")?;

    if check_only {
        println!("configuration OK");
        return Ok(());
    }

    init_logging(&config.logging).context("failed to initialize logging")?;
    if let Some(path) = config_path {
        log_config_loaded(path, path.exists());
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let context = ServerBuilder::new(config)
        .build()
        .context("failed to assemble server")?;

    info!("listening on {host}:{port}");
    build_rocket(context)
        .launch()
        .await
        .context("server exited with error")?;

    Ok(())
}

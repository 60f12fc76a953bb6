mod app;
mod clock;
mod config;
mod gui;
mod input;
mod save;
mod scene;
mod text;

use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();
    info!(
        "Starting {} ({}x{} at {} fps)",
        config.window_title, config.window_width, config.window_height, config.target_fps
    );

    app::run(&config)
}

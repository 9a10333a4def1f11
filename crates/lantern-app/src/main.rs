mod app;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use url::Url;
use winit::event_loop::EventLoop;

use lantern_config::LanternConfig;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is loaded before logging is initialized so the [logging]
    // section can feed the filter; the outcome is summarized once the
    // subscriber is up.
    let config_result = match args.config.as_deref() {
        Some(path) => lantern_config::load_from_path(Path::new(path)),
        None => lantern_config::load_config(),
    };

    // Initialize logging: CLI override wins, then the config level.
    let directive = match args.log_level.as_deref() {
        Some(level) => level.to_string(),
        None => {
            let level = config_result
                .as_ref()
                .map(|c| c.logging.level.as_str())
                .unwrap_or("info");
            format!("lantern={level}")
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "lantern=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Lantern v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = config_result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LanternConfig::default()
    });
    tracing::info!(homepage = %config.startup.homepage, "Config loaded");

    // Resolve what to load first: CLI argument over configured homepage.
    let Some(startup_url) = startup_url(&args, &config) else {
        std::process::exit(2);
    };

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::LanternApp::new(config, startup_url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

/// Pick the first page to load. A CLI address goes through the same
/// resolution rules as the toolbar entry; a bad one is fatal. A bad
/// configured homepage falls back to the built-in default.
fn startup_url(args: &cli::Args, config: &LanternConfig) -> Option<Url> {
    if let Some(text) = &args.url {
        return match lantern_chrome::resolve_input(text) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!("Cannot open {text:?}: {e}");
                None
            }
        };
    }

    match Url::parse(&config.startup.homepage) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(
                homepage = %config.startup.homepage,
                error = %e,
                "Invalid homepage in config, using default"
            );
            let fallback = lantern_config::StartupConfig::default().homepage;
            Some(Url::parse(&fallback).expect("default homepage is a valid url"))
        }
    }
}

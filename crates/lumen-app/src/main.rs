mod app_state;
mod camera;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use lumen_common::ConfigError;
use lumen_config::LumenConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "lumen=info";

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(e) => {
            eprintln!("Invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
            EnvFilter::from_default_env().add_directive(
                DEFAULT_LOG_DIRECTIVE
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            )
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load config before logging exists; the failure is logged by the caller.
fn load_config(path: Option<&str>) -> (LumenConfig, Option<ConfigError>) {
    let result = match path {
        Some(path) => lumen_config::load_config_from(Path::new(path)),
        None => lumen_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (LumenConfig::default(), Some(e)),
    }
}

fn main() {
    let args = cli::parse();

    let (config, load_error) = load_config(args.config.as_deref());

    // --log-level wins over the config file; RUST_LOG adds to either.
    let config_directive = format!("lumen={}", config.logging.level);
    init_logging(args.log_level.as_deref().or(Some(config_directive.as_str())));

    tracing::info!("Lumen v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.print_config {
        println!("{}", lumen_config::config_to_json(&config));
        return;
    }
    tracing::info!(
        "Config loaded ({} balls, fidelity {})",
        config.scene.ball_count,
        config.scene.fidelity
    );

    let registry = lumen_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::LumenApp::new(config, registry);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

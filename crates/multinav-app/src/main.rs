mod app_state;
mod cli;
mod settings;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const FALLBACK_DIRECTIVE: &str = "multinav=info";

/// Build the log filter: `RUST_LOG`, plus the CLI directive, else the
/// config directive, else `multinav=info`.
fn env_filter(cli_directive: Option<&str>, config_directive: &str) -> EnvFilter {
    let directive = cli_directive
        .and_then(|d| d.parse().ok())
        .or_else(|| config_directive.parse().ok())
        .or_else(|| FALLBACK_DIRECTIVE.parse().ok());
    let filter = EnvFilter::from_default_env();
    match directive {
        Some(d) => filter.add_directive(d),
        None => filter,
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so its level can apply; the outcome is
    // reported once the subscriber is up.
    let (config, load_error) = settings::load(&args);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(
            args.log_level.as_deref(),
            &config.logging.directive(),
        ))
        .init();

    tracing::info!("multinav v{} starting...", env!("CARGO_PKG_VERSION"));
    match load_error {
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
        None => tracing::info!(
            panes = config.layout.pane_count,
            ingest = config.ingest.enabled,
            "Config loaded"
        ),
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::MultinavApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

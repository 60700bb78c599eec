mod app_state;
mod cli;
mod list;

use std::process::ExitCode;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use winit::event_loop::EventLoop;

use taskstrip_common::{ConfigError, TaskstripError};
use taskstrip_config::{LogLevel, TaskstripConfig};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("taskstrip panicked: {info}");
        default_hook(info);
    }));
}

/// Build a filter from `RUST_LOG` plus `directive`.
fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("invalid log directive {directive:?} ({e}), using info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

/// Install the global subscriber. The filter can be swapped once the config
/// has been read.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

/// Load the config file, apply command-line overrides, and re-validate.
fn resolve_config(args: &cli::Args) -> Result<TaskstripConfig, ConfigError> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = taskstrip_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TaskstripConfig::default()
    });

    args.apply_overrides(&mut config);
    taskstrip_config::validation::validate(&config)?;
    Ok(config)
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();
    let default_level = LogLevel::default();
    let filter = init_logging(args.log_level.as_deref().unwrap_or(default_level.directive()));

    match run(&args, &filter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, filter: &FilterHandle) -> Result<(), TaskstripError> {
    let config = resolve_config(args)?;

    // An explicit --log-level wins over the config file
    if args.log_level.is_none() && config.logging.level != LogLevel::default() {
        if let Err(e) = filter.reload(env_filter(config.logging.level.directive())) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }

    if args.print_config {
        println!("{}", taskstrip_config::config_to_json(&config));
        return Ok(());
    }

    let gateway = taskstrip_gateway::create_gateway(&config.gateway);

    if args.list {
        let stdout = std::io::stdout();
        list::list_windows(&config, gateway, &mut stdout.lock())?;
        return Ok(());
    }

    tracing::info!(
        "taskstrip v{} starting (poll every {} ms)",
        env!("CARGO_PKG_VERSION"),
        config.poll.interval_ms
    );

    let event_loop = EventLoop::new()
        .map_err(|e| TaskstripError::Shell(format!("cannot create event loop: {e}")))?;
    let mut app = app_state::TaskstripApp::new(config, gateway);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| TaskstripError::Shell(format!("event loop: {e}")))?;
    tracing::info!("Shutdown complete");
    Ok(())
}

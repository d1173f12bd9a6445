//! Terminal raycaster runner (default binary).
//!
//! Reads configuration from `RAYCAST_*` environment variables, takes over the
//! terminal for the lifetime of the loop, and restores it on every exit path.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tui_raycast::core::GameMap;
use tui_raycast::engine::{GameLoop, RaycastConfig};
use tui_raycast::input::CrosstermKeys;
use tui_raycast::term::{TerminalGuard, TerminalRenderer};

fn main() -> ExitCode {
    let config = RaycastConfig::from_env();

    // Keep the writer guard alive until the process ends so buffered lines are flushed.
    let _log_guard = match config.log_path.as_deref().map(setup_logging).transpose() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // The terminal guard is dropped inside `run`, before anything is printed here.
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "fatal");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RaycastConfig) -> Result<()> {
    tracing::info!(?config, "starting");

    let map = GameMap::default_level();
    let mut game = GameLoop::new(config, map);
    let mut keys = CrosstermKeys::new();

    let mut term = TerminalGuard::acquire(TerminalRenderer::new())
        .context("failed to prepare the terminal")?;
    game.run(&mut *term, &mut keys)?;
    Ok(())
}

/// Log to a file only: stdout/stderr belong to the game while it runs.
fn setup_logging(path: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let path = Path::new(path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("RAYCAST_LOG_PATH must name a file")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", path.display());
    Ok(guard)
}

use anyhow::{Context, Result};
use automata::app::App;
use automata::cli::Cli;
use automata::config::{get_config_path, Config};
use clap::Parser;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal before the panic message is printed
        automata::tui::restore_terminal();
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    // Only --help and --version; anything else is rejected by clap
    let _cli = Cli::parse();

    let config_path = get_config_path();
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    setup_panic_hook();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("automata");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "automata.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    info!("Using config {:?}", config_path);

    let mut app = App::new(&config)?;
    let result = app.run();

    // Flush pending log lines
    drop(guard);

    result
}

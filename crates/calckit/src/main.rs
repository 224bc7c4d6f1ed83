//! calckit — area and arithmetic calculator.

use std::process::ExitCode;

use calckit_cli::ui::print_error;
use calckit_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so stdout stays parseable.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_status(&err))
        }
    }
}

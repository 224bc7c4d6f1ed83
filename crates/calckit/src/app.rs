//! Application entry point and dispatch.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use calckit_cli::output::write_to_file;
use calckit_cli::presenter::{
    BatchEntry, CLIResultPresenter, JsonResultPresenter, ResultPresenter,
};
use calckit_cli::ui;
use calckit_core::operation::{evaluate_all, OperationKind, Request};

use crate::config::{AppConfig, Command, OutputFormat};
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(version = %full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        calckit_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        anyhow::bail!("no command given; run `calckit --help` for usage");
    };

    let presenter = make_presenter(config);
    let rendered = match command {
        Command::Batch { file } => return run_batch(config, presenter.as_ref(), file),
        Command::List { name } => run_list(presenter.as_ref(), name.as_deref())?,
        op => {
            let request = op
                .request()
                .context("command does not describe an operation")?;
            let calc = request.calculate(&config.options())?;
            presenter.render_calculation(&calc)?
        }
    };

    emit(config, &rendered)
}

fn make_presenter(config: &AppConfig) -> Box<dyn ResultPresenter> {
    match config.format {
        OutputFormat::Json => Box::new(JsonResultPresenter::new(!config.quiet)),
        OutputFormat::Text => {
            let color = config.output.is_none() && !ui::is_color_disabled();
            Box::new(
                CLIResultPresenter::new(
                    config.precision,
                    config.verbose,
                    config.quiet,
                    config.details,
                )
                .with_color(color),
            )
        }
    }
}

fn run_list(presenter: &dyn ResultPresenter, name: Option<&str>) -> Result<String> {
    let kinds = match name {
        Some(name) => vec![name.parse::<OperationKind>()?],
        None => OperationKind::ALL.to_vec(),
    };
    Ok(presenter.render_operations(&kinds)?)
}

fn run_batch(config: &AppConfig, presenter: &dyn ResultPresenter, file: &Path) -> Result<()> {
    let requests = read_batch(file)?;
    info!(file = %file.display(), count = requests.len(), "running batch");

    let outcomes = evaluate_all(&requests, &config.options());
    let entries = BatchEntry::zip(&requests, outcomes);
    emit(config, &presenter.render_batch(&entries)?)?;

    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();
    if let Some(err) = entries.into_iter().find_map(|e| e.outcome.err()) {
        return Err(anyhow::Error::new(err).context(format!(
            "{failed} of {} batch entries failed",
            requests.len()
        )));
    }
    Ok(())
}

fn read_batch(file: &Path) -> Result<Vec<Request>> {
    let data = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read batch from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read batch file {}", file.display()))?
    };
    serde_json::from_str(&data)
        .with_context(|| format!("invalid batch file {}", file.display()))
}

fn emit(config: &AppConfig, rendered: &str) -> Result<()> {
    println!("{rendered}");
    if let Some(path) = &config.output {
        write_to_file(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

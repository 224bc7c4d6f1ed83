//! Result presenters: plain text for terminals, JSON for scripts.
//!
//! Presenters render to a `String` so the caller decides where it goes
//! (stdout, an output file, or both).

use serde::Serialize;

use calckit_core::calculator::CalcError;
use calckit_core::operation::{Calculation, OperationKind, Request, Value};

use crate::output::format_value;
use crate::ui;

/// One evaluated entry of a batch.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub request: Request,
    pub outcome: Result<Calculation, CalcError>,
}

impl BatchEntry {
    /// Pair each request with its outcome, in order.
    #[must_use]
    pub fn zip(
        requests: &[Request],
        outcomes: Vec<Result<Calculation, CalcError>>,
    ) -> Vec<BatchEntry> {
        requests
            .iter()
            .zip(outcomes)
            .map(|(request, outcome)| BatchEntry {
                request: *request,
                outcome,
            })
            .collect()
    }
}

/// Trait for rendering results.
pub trait ResultPresenter {
    /// Render a single calculation.
    fn render_calculation(&self, calc: &Calculation) -> serde_json::Result<String>;

    /// Render a batch of entries, successful or not.
    fn render_batch(&self, entries: &[BatchEntry]) -> serde_json::Result<String>;

    /// Render the list of available operations.
    fn render_operations(&self, kinds: &[OperationKind]) -> serde_json::Result<String>;
}

/// Plain-text presenter.
pub struct CLIResultPresenter {
    precision: usize,
    verbose: bool,
    quiet: bool,
    details: bool,
    color: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(precision: usize, verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            precision,
            verbose,
            quiet,
            details,
            color: false,
        }
    }

    /// Enable ANSI styling of headers and status tags.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn value(&self, value: &Value) -> String {
        format_value(value, self.precision, self.verbose)
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn render_calculation(&self, calc: &Calculation) -> serde_json::Result<String> {
        let value = self.value(&calc.value);
        if self.quiet {
            return Ok(value);
        }

        let mut out = format!("{} = {value}", calc.request);
        if self.details {
            let kind = calc.request.kind();
            out.push_str(&format!("\n  component: {}", kind.component()));
            out.push_str(&format!("\n  formula: {}", kind.description()));
        }
        Ok(out)
    }

    fn render_batch(&self, entries: &[BatchEntry]) -> serde_json::Result<String> {
        let mut lines = Vec::with_capacity(entries.len() + 1);
        for entry in entries {
            let line = match (&entry.outcome, self.quiet) {
                (Ok(calc), true) => self.value(&calc.value),
                (Err(_), true) => "ERROR".to_string(),
                (Ok(calc), false) => format!(
                    "{} {} = {}",
                    ui::status_tag(true, self.color),
                    entry.request,
                    self.value(&calc.value)
                ),
                (Err(err), false) => format!(
                    "{} {}: {err}",
                    ui::status_tag(false, self.color),
                    entry.request
                ),
            };
            lines.push(line);
        }

        if !self.quiet {
            let ok = entries.iter().filter(|e| e.outcome.is_ok()).count();
            lines.push(format!("{ok} of {} succeeded", entries.len()));
        }
        Ok(lines.join("\n"))
    }

    fn render_operations(&self, kinds: &[OperationKind]) -> serde_json::Result<String> {
        if self.quiet {
            let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
            return Ok(names.join("\n"));
        }

        let mut lines = vec![ui::header("Operations", self.color)];
        for kind in kinds {
            lines.push(format!(
                "  {:<10} {:<11} {:<13} {}",
                kind.name(),
                kind.component().to_string(),
                kind.parameters().join(" "),
                kind.description()
            ));
        }
        Ok(lines.join("\n"))
    }
}

/// JSON presenter.
pub struct JsonResultPresenter {
    pretty: bool,
}

impl JsonResultPresenter {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    #[serde(flatten)]
    request: &'a Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct OperationRecord {
    name: &'static str,
    component: String,
    parameters: &'static [&'static str],
    description: &'static str,
}

impl ResultPresenter for JsonResultPresenter {
    fn render_calculation(&self, calc: &Calculation) -> serde_json::Result<String> {
        self.encode(calc)
    }

    fn render_batch(&self, entries: &[BatchEntry]) -> serde_json::Result<String> {
        let records: Vec<BatchRecord<'_>> = entries
            .iter()
            .map(|entry| match &entry.outcome {
                Ok(calc) => BatchRecord {
                    request: &entry.request,
                    value: Some(calc.value),
                    error: None,
                },
                Err(err) => BatchRecord {
                    request: &entry.request,
                    value: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();
        self.encode(&records)
    }

    fn render_operations(&self, kinds: &[OperationKind]) -> serde_json::Result<String> {
        let records: Vec<OperationRecord> = kinds
            .iter()
            .map(|kind| OperationRecord {
                name: kind.name(),
                component: kind.component().to_string(),
                parameters: kind.parameters(),
                description: kind.description(),
            })
            .collect();
        self.encode(&records)
    }
}

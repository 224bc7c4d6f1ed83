//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Header line, bold cyan when `color` is set.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    let line = format!("=== {text} ===");
    if color {
        style(line).bold().cyan().to_string()
    } else {
        line
    }
}

/// Status tag for a batch entry.
#[must_use]
pub fn status_tag(ok: bool, color: bool) -> String {
    match (ok, color) {
        (true, false) => "[OK]".to_string(),
        (false, false) => "[ERROR]".to_string(),
        (true, true) => style("[OK]").green().bold().to_string(),
        (false, true) => style("[ERROR]").red().bold().to_string(),
    }
}

/// Prefix for error messages. Styling follows whether stderr is a terminal.
#[must_use]
pub fn error_prefix(color: bool) -> String {
    if color {
        style("Error:").for_stderr().red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", error_prefix(!is_color_disabled()));
}

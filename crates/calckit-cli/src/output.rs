//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

use calckit_core::constants::MAX_PRECISION;
use calckit_core::operation::Value;

/// Format a value for display.
///
/// Areas are rounded to `precision` decimal places (capped at
/// [`MAX_PRECISION`]) unless `verbose` is set,
/// in which case the shortest representation that round-trips is printed.
/// Integers are printed as-is.
#[must_use]
pub fn format_value(value: &Value, precision: usize, verbose: bool) -> String {
    match *value {
        Value::Area(area) if verbose => format!("{area:?}"),
        Value::Area(area) => {
            let precision = precision.min(MAX_PRECISION);
            format!("{area:.precision$}")
        }
        Value::Integer(n) => n.to_string(),
    }
}

/// Write rendered output to a file, with a trailing newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{content}")?;
    tracing::debug!(path = %path.display(), bytes = content.len() + 1, "output written");
    Ok(())
}

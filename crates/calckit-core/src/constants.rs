//! Constants shared by the calculators and the command-line shell.

/// Absolute tolerance used when comparing computed areas.
pub const AREA_TOLERANCE: f64 = 1e-4;

/// Default number of decimal places when rendering an area as text.
pub const DEFAULT_PRECISION: usize = 4;

/// Largest accepted number of decimal places; an `f64` carries at most 17
/// significant digits.
pub const MAX_PRECISION: usize = 17;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, malformed batch file).
    pub const ERROR_GENERIC: i32 = 1;
    /// Checked integer arithmetic overflowed.
    pub const ERROR_OVERFLOW: i32 = 3;
    /// Invalid input: rejected dimension or unknown operation.
    pub const ERROR_INVALID_INPUT: i32 = 4;
}

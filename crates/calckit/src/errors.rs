//! Error handling and exit codes.

use calckit_core::calculator::CalcError;
use calckit_core::constants::exit_codes;

/// Map an application error to a process exit code.
///
/// The first [`CalcError`] in the chain decides the code; any other
/// failure (I/O, malformed batch JSON) is a generic error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CalcError>())
        .map_or(exit_codes::ERROR_GENERIC, CalcError::exit_code)
}

/// [`exit_code`] narrowed to the range a process can report.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    u8::try_from(exit_code(err)).unwrap_or(1)
}

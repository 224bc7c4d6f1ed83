//! # calckit-core
//!
//! Pure, stateless calculators: areas of a square, rectangle and circle
//! over `f64`, and addition and subtraction over `i32`. Every function is
//! referentially transparent and safe to call from any thread.
//!
//! The [`operation`] module adds typed requests with opt-in strict
//! validation and checked overflow on top of the pure functions.

pub mod arithmetic;
pub mod calculator;
pub mod constants;
pub(crate) mod float_serde;
pub mod geometry;
pub mod operation;
pub mod options;

// Re-exports
pub use arithmetic::{add, checked_add, checked_subtract, subtract};
pub use calculator::CalcError;
pub use constants::{exit_codes, AREA_TOLERANCE, DEFAULT_PRECISION, MAX_PRECISION};
pub use geometry::{area_circle, area_rectangle, area_square, validate_dimension};
pub use operation::{evaluate_all, Calculation, Component, OperationKind, Request, Value};
pub use options::{Options, OverflowPolicy, ValidationPolicy};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluate a single request with the default (permissive, wrapping) options.
///
/// # Example
/// ```
/// use calckit_core::{evaluate, Request, Value};
///
/// assert_eq!(evaluate(&Request::Add { a: 5, b: 3 }), Value::Integer(8));
/// assert_eq!(evaluate(&Request::Square { side: 4.0 }), Value::Area(16.0));
/// ```
///
/// Unlike [`Request::evaluate`] this cannot fail: it calls the pure
/// functions directly, without validation and with wrapping arithmetic.
#[must_use]
pub fn evaluate(request: &Request) -> Value {
    match *request {
        Request::Square { side } => Value::Area(area_square(side)),
        Request::Rectangle { base, height } => Value::Area(area_rectangle(base, height)),
        Request::Circle { radius } => Value::Area(area_circle(radius)),
        Request::Add { a, b } => Value::Integer(add(a, b)),
        Request::Subtract { a, b } => Value::Integer(subtract(a, b)),
    }
}

//! Integer addition and subtraction over `i32`.
//!
//! [`add`] and [`subtract`] wrap on overflow (two's complement), so they are
//! total and behave the same in debug and release builds. [`checked_add`]
//! and [`checked_subtract`] report overflow as [`CalcError::Overflow`].

use crate::calculator::CalcError;

/// `a + b`, wrapping on overflow.
///
/// ```
/// assert_eq!(calckit_core::arithmetic::add(5, 3), 8);
/// assert_eq!(calckit_core::arithmetic::add(i32::MAX, 1), i32::MIN);
/// ```
#[must_use]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
#[must_use]
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// `a + b`, or an error if the sum does not fit in `i32`.
pub fn checked_add(a: i32, b: i32) -> Result<i32, CalcError> {
    a.checked_add(b)
        .ok_or(CalcError::Overflow { op: "add", a, b })
}

/// `a - b`, or an error if the difference does not fit in `i32`.
pub fn checked_subtract(a: i32, b: i32) -> Result<i32, CalcError> {
    a.checked_sub(b).ok_or(CalcError::Overflow {
        op: "subtract",
        a,
        b,
    })
}

//! Typed requests and dispatch onto the pure calculators.
//!
//! A [`Request`] names one operation together with its arguments.
//! [`Request::evaluate`] applies the [`Options`] policies and then calls
//! the matching function in [`crate::geometry`] or [`crate::arithmetic`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::arithmetic;
use crate::calculator::CalcError;
use crate::geometry;
use crate::options::{Options, OverflowPolicy, ValidationPolicy};

/// Which calculator an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Area formulas over `f64`.
    Geometry,
    /// Integer arithmetic over `i32`.
    Arithmetic,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry => f.write_str("geometry"),
            Self::Arithmetic => f.write_str("arithmetic"),
        }
    }
}

/// The available operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Square,
    Rectangle,
    Circle,
    Add,
    Subtract,
}

impl OperationKind {
    /// Every operation, geometry first.
    pub const ALL: [OperationKind; 5] = [
        Self::Square,
        Self::Rectangle,
        Self::Circle,
        Self::Add,
        Self::Subtract,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Number of arguments.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Square | Self::Circle => 1,
            Self::Rectangle | Self::Add | Self::Subtract => 2,
        }
    }

    #[must_use]
    pub fn component(self) -> Component {
        match self {
            Self::Square | Self::Rectangle | Self::Circle => Component::Geometry,
            Self::Add | Self::Subtract => Component::Arithmetic,
        }
    }

    /// Argument names in call order.
    #[must_use]
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::Square => &["side"],
            Self::Rectangle => &["base", "height"],
            Self::Circle => &["radius"],
            Self::Add | Self::Subtract => &["a", "b"],
        }
    }

    /// One-line description with the formula.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Square => "area of a square: side * side",
            Self::Rectangle => "area of a rectangle: base * height",
            Self::Circle => "area of a circle: pi * radius * radius",
            Self::Add => "integer sum: a + b",
            Self::Subtract => "integer difference: a - b",
        }
    }
}

impl FromStr for OperationKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CalcError::UnknownOperation(s.trim().to_string()))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One operation with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    Square {
        #[serde(with = "crate::float_serde")]
        side: f64,
    },
    Rectangle {
        #[serde(with = "crate::float_serde")]
        base: f64,
        #[serde(with = "crate::float_serde")]
        height: f64,
    },
    Circle {
        #[serde(with = "crate::float_serde")]
        radius: f64,
    },
    Add { a: i32, b: i32 },
    Subtract { a: i32, b: i32 },
}

impl Request {
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Square { .. } => OperationKind::Square,
            Self::Rectangle { .. } => OperationKind::Rectangle,
            Self::Circle { .. } => OperationKind::Circle,
            Self::Add { .. } => OperationKind::Add,
            Self::Subtract { .. } => OperationKind::Subtract,
        }
    }

    /// Evaluate the request under the given options.
    pub fn evaluate(&self, opts: &Options) -> Result<Value, CalcError> {
        let value = match *self {
            Self::Square { side } => {
                let side = dimension(opts.validation, "side", side)?;
                Value::Area(geometry::area_square(side))
            }
            Self::Rectangle { base, height } => {
                let base = dimension(opts.validation, "base", base)?;
                let height = dimension(opts.validation, "height", height)?;
                Value::Area(geometry::area_rectangle(base, height))
            }
            Self::Circle { radius } => {
                let radius = dimension(opts.validation, "radius", radius)?;
                Value::Area(geometry::area_circle(radius))
            }
            Self::Add { a, b } => Value::Integer(match opts.overflow {
                OverflowPolicy::Wrap => arithmetic::add(a, b),
                OverflowPolicy::Checked => arithmetic::checked_add(a, b)?,
            }),
            Self::Subtract { a, b } => Value::Integer(match opts.overflow {
                OverflowPolicy::Wrap => arithmetic::subtract(a, b),
                OverflowPolicy::Checked => arithmetic::checked_subtract(a, b)?,
            }),
        };
        debug!(request = %self, %value, "evaluated");
        Ok(value)
    }

    /// Evaluate and pair the result with the request.
    pub fn calculate(self, opts: &Options) -> Result<Calculation, CalcError> {
        let value = self.evaluate(opts)?;
        Ok(Calculation {
            request: self,
            value,
        })
    }
}

fn dimension(policy: ValidationPolicy, name: &'static str, value: f64) -> Result<f64, CalcError> {
    match policy {
        ValidationPolicy::Permissive => Ok(value),
        ValidationPolicy::Strict => geometry::validate_dimension(name, value),
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().name();
        match self {
            Self::Square { side } => write!(f, "{name}({side})"),
            Self::Rectangle { base, height } => write!(f, "{name}({base}, {height})"),
            Self::Circle { radius } => write!(f, "{name}({radius})"),
            Self::Add { a, b } | Self::Subtract { a, b } => write!(f, "{name}({a}, {b})"),
        }
    }
}

/// Result of evaluating a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// An area from the geometry calculator. Non-finite areas serialize
    /// as `"inf"`, `"-inf"` or `"NaN"`.
    Area(#[serde(serialize_with = "crate::float_serde::serialize")] f64),
    /// A sum or difference from the arithmetic calculator.
    Integer(i32),
}

impl Value {
    /// The area, if this is a geometric result.
    #[must_use]
    pub fn as_area(&self) -> Option<f64> {
        match *self {
            Self::Area(area) => Some(area),
            Self::Integer(_) => None,
        }
    }

    /// The integer, if this is an arithmetic result.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            Self::Integer(n) => Some(n),
            Self::Area(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area(area) => write!(f, "{area}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// A request together with its computed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    #[serde(flatten)]
    pub request: Request,
    pub value: Value,
}

/// Evaluate a batch of requests in order.
///
/// Each entry is evaluated independently; a failing entry does not stop
/// the ones after it.
pub fn evaluate_all(
    requests: &[Request],
    opts: &Options,
) -> Vec<Result<Calculation, CalcError>> {
    let results: Vec<_> = requests.iter().map(|r| r.calculate(opts)).collect();
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(total = results.len(), failed, "batch evaluated");
    results
}

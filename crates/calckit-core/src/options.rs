//! Evaluation options: how strictly inputs are checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How geometric dimensions are checked before computing an area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Accept any `f64`, including negative and non-finite values.
    #[default]
    Permissive,
    /// Reject negative and non-finite dimensions.
    Strict,
}

/// How integer overflow is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wrapping.
    #[default]
    Wrap,
    /// Report overflow as an error.
    Checked,
}

/// Options for evaluating a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Dimension validation policy.
    pub validation: ValidationPolicy,
    /// Integer overflow policy.
    pub overflow: OverflowPolicy,
}

impl Options {
    /// Strict validation and checked overflow.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validation: ValidationPolicy::Strict,
            overflow: OverflowPolicy::Checked,
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown validation policy '{other}' (expected permissive or strict)"
            )),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(Self::Wrap),
            "checked" => Ok(Self::Checked),
            other => Err(format!(
                "unknown overflow policy '{other}' (expected wrap or checked)"
            )),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrap => f.write_str("wrap"),
            Self::Checked => f.write_str("checked"),
        }
    }
}

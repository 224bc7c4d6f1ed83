//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};

use calckit_core::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use calckit_core::operation::Request;
use calckit_core::options::{Options, OverflowPolicy, ValidationPolicy};

/// calckit — area and integer arithmetic calculator.
#[derive(Parser, Debug)]
#[command(name = "calckit", version, about)]
pub struct AppConfig {
    /// Dimension validation: permissive accepts any number, strict rejects negatives.
    #[arg(
        long,
        global = true,
        default_value = "permissive",
        env = "CALCKIT_VALIDATION"
    )]
    pub validation: ValidationPolicy,

    /// Integer overflow handling: wrap or checked.
    #[arg(long, global = true, default_value = "wrap", env = "CALCKIT_OVERFLOW")]
    pub overflow: OverflowPolicy,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimal places for areas in text output (0 to 17).
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_PRECISION,
        value_parser = precision_parser()
    )]
    pub precision: usize,

    /// Verbose output (full-precision areas).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show detailed information.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Also write the rendered result to this file.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Operations and utility commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Area of a square: side * side.
    Square {
        #[arg(allow_negative_numbers = true)]
        side: f64,
    },
    /// Area of a rectangle: base * height.
    Rectangle {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
    /// Area of a circle: pi * radius * radius.
    Circle {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Integer sum: a + b.
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Integer difference: a - b.
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Evaluate a JSON array of requests ("-" reads stdin).
    Batch { file: PathBuf },
    /// List available operations, or describe one.
    List { name: Option<String> },
}

impl Command {
    /// The single request this command evaluates, if it is an operation.
    #[must_use]
    pub fn request(&self) -> Option<Request> {
        match *self {
            Self::Square { side } => Some(Request::Square { side }),
            Self::Rectangle { base, height } => Some(Request::Rectangle { base, height }),
            Self::Circle { radius } => Some(Request::Circle { radius }),
            Self::Add { a, b } => Some(Request::Add { a, b }),
            Self::Subtract { a, b } => Some(Request::Subtract { a, b }),
            Self::Batch { .. } | Self::List { .. } => None,
        }
    }
}

fn precision_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_PRECISION as u64)
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Evaluation options selected by the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            validation: self.validation,
            overflow: self.overflow,
        }
    }
}

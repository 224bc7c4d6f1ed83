//! # calckit-cli
//!
//! CLI output formatting, result presenters, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{BatchEntry, CLIResultPresenter, JsonResultPresenter, ResultPresenter};

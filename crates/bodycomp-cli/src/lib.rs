//! # bodycomp-cli
//!
//! CLI output, console styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::OutputFormat;
pub use presenter::CLIResultPresenter;

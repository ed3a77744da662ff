//! CLI output formatting.

use serde::Serialize;

use bodycomp_core::calculator::BodyComposition;
use bodycomp_core::constants::INVALID_INPUT_TEXT;
use bodycomp_core::display::{DisplayField, DisplayFields};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Label: value` lines.
    #[default]
    Text,
    /// Values only, one per line.
    Quiet,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Pick the format from CLI flags. `--json` wins over `--quiet`.
    #[must_use]
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if quiet {
            OutputFormat::Quiet
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// `Label: value` lines.
#[must_use]
pub fn format_lines(display: &DisplayFields) -> String {
    display
        .iter()
        .map(DisplayField::line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Values only, one per line.
#[must_use]
pub fn format_values(display: &DisplayFields) -> String {
    display
        .iter()
        .map(|f| f.value.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result record as pretty JSON.
pub fn format_json(result: &BodyComposition) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Uniform error as JSON.
pub fn format_json_error() -> serde_json::Result<String> {
    serde_json::to_string(&ErrorBody {
        error: INVALID_INPUT_TEXT,
    })
}

//! CLI result presenter.

use std::io::{self, Write};

use tracing::{debug, warn};

use bodycomp_core::calculator::{BodyComposition, ValidationError};
use bodycomp_core::display::DisplayFields;
use bodycomp_core::interfaces::ResultPresenter;

use crate::output::{format_json, format_json_error, format_lines, format_values, OutputFormat};

/// CLI result presenter writing to any sink (stdout by default).
pub struct CLIResultPresenter<W: Write = io::Stdout> {
    format: OutputFormat,
    out: W,
    error: Option<io::Error>,
}

impl CLIResultPresenter {
    /// Presenter writing to stdout.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(format, io::stdout())
    }
}

impl<W: Write> CLIResultPresenter<W> {
    #[must_use]
    pub fn with_writer(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out,
            error: None,
        }
    }

    /// Take the first write or serialization failure, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consume the presenter, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let written = writeln!(self.out, "{text}").and_then(|()| self.out.flush());
        if let Err(e) = written {
            self.fail(e);
        }
    }

    fn fail(&mut self, err: io::Error) {
        warn!("failed to write output: {err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl<W: Write> ResultPresenter for CLIResultPresenter<W> {
    fn present_result(&mut self, result: &BodyComposition, display: &DisplayFields) {
        let text = match self.format {
            OutputFormat::Text => format_lines(display),
            OutputFormat::Quiet => format_values(display),
            OutputFormat::Json => match format_json(result) {
                Ok(json) => json,
                Err(e) => {
                    self.fail(e.into());
                    return;
                }
            },
        };
        self.emit(&text);
    }

    fn present_error(&mut self, error: &ValidationError, display: &DisplayFields) {
        debug!("presenting validation failure: {error}");
        let text = match self.format {
            OutputFormat::Text => format_lines(display),
            OutputFormat::Quiet => format_values(display),
            OutputFormat::Json => match format_json_error() {
                Ok(json) => json,
                Err(e) => {
                    self.fail(e.into());
                    return;
                }
            },
        };
        self.emit(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodycomp_core::calculator::compute;
    use bodycomp_core::inputs::RawInputs;
    use bodycomp_core::interfaces::present;

    fn scenario(age: &str) -> RawInputs {
        RawInputs {
            name: "Ada".into(),
            age: age.into(),
            height: "180".into(),
            weight: "80".into(),
            skinfolds: ["10", "8", "12", "15", "9", "7"].map(String::from),
        }
    }

    fn run(format: OutputFormat, age: &str) -> String {
        let mut presenter = CLIResultPresenter::with_writer(format, Vec::new());
        present(&mut presenter, &compute(&scenario(age)));
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn text_success() {
        let out = run(OutputFormat::Text, "36");
        assert_eq!(
            out,
            "Name: Ada\nAge: 36\nBMI: 24.7\nBMI Category: Normal weight\n\
             Sum: 61.0 mm\nBody Fat: 9.0%\nFat Mass: 7.2 kg\nLean Mass: 72.8 kg\n"
        );
    }

    #[test]
    fn text_failure_fills_all_slots() {
        let out = run(OutputFormat::Text, "twenty");
        assert_eq!(out.lines().count(), 8);
        assert!(out.lines().all(|l| l.ends_with("Invalid input")));
    }

    #[test]
    fn quiet_success() {
        let out = run(OutputFormat::Quiet, "36");
        assert_eq!(out.lines().nth(5), Some("9.0%"));
    }

    #[test]
    fn json_success() {
        let out = run(OutputFormat::Json, "36");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["age"], 36);
        assert_eq!(value["bmi_category"], "Normal weight");
    }

    #[test]
    fn json_failure() {
        let out = run(OutputFormat::Json, "x");
        assert_eq!(out.trim(), r#"{"error":"Invalid input"}"#);
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::WriteZero, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_kept() {
        let mut presenter = CLIResultPresenter::with_writer(OutputFormat::Text, FullDisk);
        present(&mut presenter, &compute(&scenario("36")));
        let err = presenter.take_error().expect("write error should be recorded");
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert!(presenter.take_error().is_none());
    }

    #[test]
    fn successful_write_has_no_error() {
        let mut presenter = CLIResultPresenter::with_writer(OutputFormat::Json, Vec::new());
        present(&mut presenter, &compute(&scenario("36")));
        assert!(presenter.take_error().is_none());
    }

    #[test]
    fn stdout_presenter_does_not_panic() {
        let mut presenter = CLIResultPresenter::new(OutputFormat::Quiet);
        present(&mut presenter, &compute(&scenario("36")));
    }
}

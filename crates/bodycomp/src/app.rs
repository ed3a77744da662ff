//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use bodycomp_cli::presenter::CLIResultPresenter;
use bodycomp_cli::ui;
use bodycomp_core::calculator::compute_with_options;
use bodycomp_core::constants::exit_codes;
use bodycomp_core::interfaces::present;

use crate::config::AppConfig;
use crate::errors::exit_code;
use crate::version::full_version;

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    debug!("{} starting", full_version());

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bodycomp_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config, io::stdout())
}

fn run_cli<W: Write>(config: &AppConfig, out: W) -> Result<i32> {
    if !config.has_inputs() {
        ui::print_warning("no measurements given; pass them as flags or use --tui");
    }

    let outcome = compute_with_options(&config.raw_inputs(), &config.options());

    let mut presenter = CLIResultPresenter::with_writer(config.output_format(), out);
    present(&mut presenter, &outcome);
    if let Some(err) = presenter.take_error() {
        return Err(err).context("writing results");
    }

    Ok(exit_code(&outcome))
}

fn run_tui(config: &AppConfig) -> Result<i32> {
    let mut app = bodycomp_tui::TuiApp::with_inputs(config.raw_inputs(), config.options());
    app.run().context("TUI error")?;
    info!("form closed after {} calculation(s)", app.calculations);
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_success_exit_code() {
        let config = AppConfig {
            name: Some("Ada".into()),
            age: Some("36".into()),
            height: Some("180".into()),
            weight: Some("80".into()),
            back: Some("10".into()),
            tricep: Some("8".into()),
            supra_iliac: Some("12".into()),
            abdomen: Some("15".into()),
            thighs: Some("9".into()),
            calves: Some("7".into()),
            quiet: true,
            ..AppConfig::default()
        };
        assert_eq!(run(&config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn cli_validation_exit_code() {
        let config = AppConfig {
            age: Some("twenty".into()),
            quiet: true,
            ..AppConfig::default()
        };
        assert_eq!(run(&config).unwrap(), exit_codes::ERROR_VALIDATION);
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn cli_write_failure_is_an_error() {
        let config = AppConfig {
            age: Some("36".into()),
            json: true,
            ..AppConfig::default()
        };
        let err = run_cli(&config, Closed).unwrap_err();
        assert!(format!("{err:#}").starts_with("writing results"));
    }

    #[test]
    fn cli_text_output_is_eight_lines() {
        let config = AppConfig {
            age: Some("36".into()),
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        assert_eq!(
            run_cli(&config, &mut out).unwrap(),
            exit_codes::ERROR_VALIDATION
        );
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("Name: Invalid input"));
    }

    #[test]
    fn completion_succeeds() {
        let config = AppConfig {
            completion: Some(clap_complete::Shell::Bash),
            ..AppConfig::default()
        };
        assert_eq!(run(&config).unwrap(), exit_codes::SUCCESS);
    }
}

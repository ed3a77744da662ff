//! BodyComp-rs: BMI and skinfold body fat calculator.

use bodycomp_core::constants::exit_codes;
use bodycomp_lib::{app, config, logging};

fn main() {
    // Parse CLI args first so --verbose can raise the log level
    let config = config::AppConfig::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(logging::env_filter(config.verbose))
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            bodycomp_cli::ui::print_error(&format!("{e:#}"));
            exit_codes::ERROR_IO
        }
    };
    std::process::exit(code);
}

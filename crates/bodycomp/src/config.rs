//! Application configuration from CLI flags and environment.

use clap::Parser;

use bodycomp_cli::OutputFormat;
use bodycomp_core::inputs::{RawInputs, SkinfoldSite};
use bodycomp_core::options::{Options, ValidationPolicy};

/// BodyComp-rs: BMI and skinfold body fat calculator.
#[derive(Parser, Debug, Default)]
#[command(name = "bodycomp", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Name (echoed in the results).
    #[arg(long, env = "BODYCOMP_NAME")]
    pub name: Option<String>,

    /// Age in years (integer).
    #[arg(long, env = "BODYCOMP_AGE", allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Height in centimeters.
    #[arg(long, env = "BODYCOMP_HEIGHT", allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Weight in kilograms.
    #[arg(long, env = "BODYCOMP_WEIGHT", allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Back skinfold in millimeters.
    #[arg(long, env = "BODYCOMP_BACK", allow_hyphen_values = true)]
    pub back: Option<String>,

    /// Tricep skinfold in millimeters.
    #[arg(long, env = "BODYCOMP_TRICEP", allow_hyphen_values = true)]
    pub tricep: Option<String>,

    /// Supra iliac skinfold in millimeters.
    #[arg(long, env = "BODYCOMP_SUPRA_ILIAC", allow_hyphen_values = true)]
    pub supra_iliac: Option<String>,

    /// Abdomen skinfold in millimeters.
    #[arg(long, env = "BODYCOMP_ABDOMEN", allow_hyphen_values = true)]
    pub abdomen: Option<String>,

    /// Thigh skinfold in millimeters.
    #[arg(long, env = "BODYCOMP_THIGHS", allow_hyphen_values = true)]
    pub thighs: Option<String>,

    /// Calf skinfold in millimeters.
    #[arg(long, env = "BODYCOMP_CALVES", allow_hyphen_values = true)]
    pub calves: Option<String>,

    /// Reject negative, zero, and non-finite measurements.
    #[arg(long)]
    pub strict: bool,

    /// Print the result record as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (values only, no labels).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch the interactive form.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    fn skinfold_arg(&self, site: SkinfoldSite) -> Option<&String> {
        match site {
            SkinfoldSite::Back => self.back.as_ref(),
            SkinfoldSite::Tricep => self.tricep.as_ref(),
            SkinfoldSite::SupraIliac => self.supra_iliac.as_ref(),
            SkinfoldSite::Abdomen => self.abdomen.as_ref(),
            SkinfoldSite::Thighs => self.thighs.as_ref(),
            SkinfoldSite::Calves => self.calves.as_ref(),
        }
    }

    /// Raw form text. An omitted flag reads as an empty field.
    #[must_use]
    pub fn raw_inputs(&self) -> RawInputs {
        let mut raw = RawInputs {
            name: self.name.clone().unwrap_or_default(),
            age: self.age.clone().unwrap_or_default(),
            height: self.height.clone().unwrap_or_default(),
            weight: self.weight.clone().unwrap_or_default(),
            ..RawInputs::default()
        };
        for site in SkinfoldSite::ALL {
            if let Some(value) = self.skinfold_arg(site) {
                raw.set_skinfold(site, value.as_str());
            }
        }
        raw
    }

    /// Whether any input was given on the command line or in the environment.
    #[must_use]
    pub fn has_inputs(&self) -> bool {
        self.name.is_some()
            || self.age.is_some()
            || self.height.is_some()
            || self.weight.is_some()
            || SkinfoldSite::ALL
                .iter()
                .any(|&site| self.skinfold_arg(site).is_some())
    }

    /// Calculation options.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            policy: if self.strict {
                ValidationPolicy::Strict
            } else {
                ValidationPolicy::Lenient
            },
        }
    }

    /// Output format for CLI mode.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bodycomp").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn all_inputs_map_to_raw() {
        let config = parse(&[
            "--name", "Ada", "--age", "36", "--height", "180", "--weight", "80", "--back", "10",
            "--tricep", "8", "--supra-iliac", "12", "--abdomen", "15", "--thighs", "9",
            "--calves", "7",
        ]);
        let raw = config.raw_inputs();
        assert_eq!(raw.name, "Ada");
        assert_eq!(raw.height, "180");
        assert_eq!(raw.skinfold(SkinfoldSite::SupraIliac), "12");
        assert_eq!(raw.skinfold(SkinfoldSite::Calves), "7");
        assert!(config.has_inputs());
    }

    #[test]
    fn omitted_flags_are_empty() {
        let config = AppConfig::default();
        assert_eq!(config.raw_inputs(), RawInputs::default());
        assert!(!config.has_inputs());
    }

    #[test]
    fn negative_values_accepted_as_text() {
        let config = parse(&["--height", "-180", "--back", "-1.5"]);
        let raw = config.raw_inputs();
        assert_eq!(raw.height, "-180");
        assert_eq!(raw.skinfold(SkinfoldSite::Back), "-1.5");
    }

    #[test]
    fn strict_flag_selects_policy() {
        assert!(parse(&["--strict"]).options().is_strict());
        assert!(!parse(&[]).options().is_strict());
    }

    #[test]
    fn output_format_flags() {
        assert_eq!(parse(&["--json"]).output_format(), OutputFormat::Json);
        assert_eq!(parse(&["-q"]).output_format(), OutputFormat::Quiet);
        assert_eq!(parse(&[]).output_format(), OutputFormat::Text);
    }
}

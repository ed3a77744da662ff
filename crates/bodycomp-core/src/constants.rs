//! Constants for the body composition formulas and display contract.

/// Centimeters per meter, used for the single height conversion.
pub const CM_PER_METER: f64 = 100.0;

/// Lower bound (inclusive) of the "Normal weight" BMI band.
pub const BMI_NORMAL_MIN: f64 = 18.5;

/// Lower bound (inclusive) of the "Overweight" BMI band.
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound (inclusive) of the "Obese" BMI band.
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Slope of the linear skinfold-sum body fat regression.
pub const BODY_FAT_SLOPE: f64 = 0.1051;

/// Intercept of the linear skinfold-sum body fat regression.
pub const BODY_FAT_INTERCEPT: f64 = 2.585;

/// Number of skinfold sites collected.
pub const SKINFOLD_SITE_COUNT: usize = 6;

/// Text shown in every result slot when a calculation is rejected.
pub const INVALID_INPUT_TEXT: &str = "Invalid input";

/// Text shown in every result slot before the first calculation.
pub const PLACEHOLDER_TEXT: &str = "--";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// One or more inputs were rejected.
    pub const ERROR_VALIDATION: i32 = 1;
    /// Invalid command-line usage (matches clap's own exit code).
    pub const ERROR_USAGE: i32 = 2;
    /// Terminal or I/O failure.
    pub const ERROR_IO: i32 = 3;
}

//! # bodycomp-core
//!
//! Core library for the BodyComp-rs body composition calculator.
//! Parses raw form text, computes BMI with its category, and estimates body
//! fat from the sum of six skinfold readings.

pub mod bmi;
pub mod body_fat;
pub mod calculator;
pub mod constants;
pub mod display;
pub mod inputs;
pub mod interfaces;
pub mod options;

// Re-exports
pub use bmi::{body_mass_index, classify_bmi, BmiCategory};
pub use calculator::{compute, compute_with_options, BodyComposition, ValidationError};
pub use constants::{exit_codes, INVALID_INPUT_TEXT, PLACEHOLDER_TEXT};
pub use display::{DisplayField, DisplayFields, DisplayStatus};
pub use inputs::{InputField, Measurements, RawInputs, SkinfoldSite};
pub use interfaces::{InputSource, ResultPresenter};
pub use options::{Options, ValidationPolicy};

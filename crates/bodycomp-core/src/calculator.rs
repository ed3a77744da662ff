//! The body composition calculator.
//!
//! `compute` takes the raw text of the form, parses it into typed
//! [`Measurements`] and runs the BMI and skinfold formulas. Any parse failure
//! rejects the whole calculation with a single [`ValidationError`].

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::bmi::{body_mass_index, classify_bmi, BmiCategory};
use crate::body_fat::{body_fat_percentage, fat_mass, lean_mass, skinfold_sum};
use crate::inputs::{
    parse_measurements, InputField, Measurements, NumberKind, RawInputs, SkinfoldSite,
};
use crate::options::Options;

/// Error type for body composition calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A numeric field could not be parsed.
    #[error("invalid input: {field} is not a valid {expected}")]
    Unparseable {
        field: InputField,
        expected: NumberKind,
    },

    /// A parsed value was rejected by the strict range policy.
    #[error("invalid input: {field} is out of range")]
    OutOfRange { field: InputField },
}

impl ValidationError {
    /// The field that caused the rejection.
    #[must_use]
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::Unparseable { field, .. } | ValidationError::OutOfRange { field } => {
                *field
            }
        }
    }
}

/// Result of a successful calculation.
///
/// Non-finite metrics serialize as the strings `"inf"`, `"-inf"` and `"NaN"`,
/// the same text the display shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyComposition {
    pub name: String,
    pub age: i64,
    #[serde(serialize_with = "finite_or_text")]
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Sum of the six skinfold readings, in millimeters.
    #[serde(serialize_with = "finite_or_text")]
    pub skinfold_sum: f64,
    #[serde(serialize_with = "finite_or_text")]
    pub body_fat_percentage: f64,
    /// Fat mass in kilograms.
    #[serde(serialize_with = "finite_or_text")]
    pub fat_mass: f64,
    /// Lean mass in kilograms.
    #[serde(serialize_with = "finite_or_text")]
    pub lean_mass: f64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn finite_or_text<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

/// Compute body composition from raw form text with the default (lenient) options.
pub fn compute(inputs: &RawInputs) -> Result<BodyComposition, ValidationError> {
    compute_with_options(inputs, &Options::default())
}

/// Compute body composition from raw form text.
pub fn compute_with_options(
    inputs: &RawInputs,
    opts: &Options,
) -> Result<BodyComposition, ValidationError> {
    let measurements = parse_measurements(inputs).map_err(|(field, expected)| {
        debug!(%field, %expected, "rejecting calculation: unparseable field");
        ValidationError::Unparseable { field, expected }
    })?;

    if opts.is_strict() {
        check_ranges(&measurements).inspect_err(|err| {
            debug!(field = %err.field(), "rejecting calculation: out of range");
        })?;
    }

    Ok(compute_measurements(&measurements))
}

/// Run the formulas over already-typed measurements.
#[must_use]
pub fn compute_measurements(m: &Measurements) -> BodyComposition {
    let bmi = body_mass_index(m.weight_kg, m.height_cm);
    let bmi_category = classify_bmi(bmi);

    let sum = skinfold_sum(&m.skinfolds_mm);
    let pct = body_fat_percentage(sum);
    let fat = fat_mass(pct, m.weight_kg);
    let lean = lean_mass(m.weight_kg, fat);

    debug!(
        bmi,
        category = %bmi_category,
        skinfold_sum = sum,
        body_fat = pct,
        "computed body composition"
    );

    BodyComposition {
        name: m.name.clone(),
        age: m.age,
        bmi,
        bmi_category,
        skinfold_sum: sum,
        body_fat_percentage: pct,
        fat_mass: fat,
        lean_mass: lean,
    }
}

fn check_ranges(m: &Measurements) -> Result<(), ValidationError> {
    let out_of_range = |field| Err(ValidationError::OutOfRange { field });

    if m.age < 0 {
        return out_of_range(InputField::Age);
    }
    if !(m.height_cm.is_finite() && m.height_cm > 0.0) {
        return out_of_range(InputField::Height);
    }
    if !(m.weight_kg.is_finite() && m.weight_kg > 0.0) {
        return out_of_range(InputField::Weight);
    }
    for site in SkinfoldSite::ALL {
        let reading = m.skinfold(site);
        if !(reading.is_finite() && reading >= 0.0) {
            return out_of_range(InputField::Skinfold(site));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(age: &str, height: &str, weight: &str, folds: [&str; 6]) -> RawInputs {
        RawInputs {
            name: "Test".into(),
            age: age.into(),
            height: height.into(),
            weight: weight.into(),
            skinfolds: folds.map(String::from),
        }
    }

    fn reference() -> RawInputs {
        inputs("30", "180", "80", ["10", "8", "12", "15", "9", "7"])
    }

    #[test]
    fn reference_scenario() {
        let r = compute(&reference()).unwrap();
        assert_eq!(r.name, "Test");
        assert_eq!(r.age, 30);
        assert!((r.bmi - 24.691_358).abs() < 1e-6);
        assert_eq!(r.bmi_category, BmiCategory::NormalWeight);
        assert!((r.skinfold_sum - 61.0).abs() < 1e-12);
        assert!((r.body_fat_percentage - 8.9961).abs() < 1e-12);
        assert!((r.fat_mass - 7.196_88).abs() < 1e-9);
        assert!((r.lean_mass - 72.803_12).abs() < 1e-9);
    }

    #[test]
    fn obese_scenario() {
        let r = compute(&inputs("40", "160", "90", ["1"; 6])).unwrap();
        assert!((r.bmi - 35.156_25).abs() < 1e-9);
        assert_eq!(r.bmi_category, BmiCategory::Obese);
    }

    #[test]
    fn non_numeric_age_rejected() {
        let err = compute(&inputs("twenty", "180", "80", ["1"; 6])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Unparseable {
                field: InputField::Age,
                expected: NumberKind::Integer,
            }
        );
    }

    #[test]
    fn empty_skinfold_rejected() {
        let mut raw = reference();
        raw.set_skinfold(SkinfoldSite::Calves, "");
        let err = compute(&raw).unwrap_err();
        assert_eq!(err.field(), InputField::Skinfold(SkinfoldSite::Calves));
    }

    #[test]
    fn non_numeric_weight_rejected() {
        let mut raw = reference();
        raw.weight = "80kg".into();
        assert_eq!(compute(&raw).unwrap_err().field(), InputField::Weight);
    }

    #[test]
    fn lenient_accepts_zero_height() {
        let mut raw = reference();
        raw.height = "0".into();
        let r = compute(&raw).unwrap();
        assert!(r.bmi.is_infinite());
        assert_eq!(r.bmi_category, BmiCategory::Obese);
    }

    #[test]
    fn lenient_accepts_negative_values() {
        let mut raw = reference();
        raw.age = "-1".into();
        raw.weight = "-80".into();
        raw.set_skinfold(SkinfoldSite::Back, "-10");
        assert!(compute(&raw).is_ok());
    }

    #[test]
    fn strict_rejects_zero_height() {
        let mut raw = reference();
        raw.height = "0".into();
        let err = compute_with_options(&raw, &Options::strict()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: InputField::Height
            }
        );
    }

    #[test]
    fn strict_rejects_negative_skinfold() {
        let mut raw = reference();
        raw.set_skinfold(SkinfoldSite::Tricep, "-0.5");
        let err = compute_with_options(&raw, &Options::strict()).unwrap_err();
        assert_eq!(err.field(), InputField::Skinfold(SkinfoldSite::Tricep));
    }

    #[test]
    fn strict_rejects_non_finite() {
        let mut raw = reference();
        raw.weight = "inf".into();
        let err = compute_with_options(&raw, &Options::strict()).unwrap_err();
        assert_eq!(err.field(), InputField::Weight);
    }

    #[test]
    fn strict_accepts_reference() {
        assert!(compute_with_options(&reference(), &Options::strict()).is_ok());
    }

    #[test]
    fn parse_errors_win_over_range_errors() {
        let mut raw = reference();
        raw.height = "0".into();
        raw.set_skinfold(SkinfoldSite::Thighs, "n/a");
        let err = compute_with_options(&raw, &Options::strict()).unwrap_err();
        assert!(matches!(err, ValidationError::Unparseable { .. }));
    }

    #[test]
    fn error_display() {
        let err = ValidationError::Unparseable {
            field: InputField::Age,
            expected: NumberKind::Integer,
        };
        assert_eq!(err.to_string(), "invalid input: age is not a valid integer");

        let err = ValidationError::OutOfRange {
            field: InputField::Height,
        };
        assert_eq!(err.to_string(), "invalid input: height is out of range");
    }

    #[test]
    fn serializes_category_label() {
        let r = compute(&reference()).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["bmi_category"], "Normal weight");
        assert_eq!(json["age"], 30);
        assert!(json["bmi"].is_number());
    }

    #[test]
    fn serializes_non_finite_as_text() {
        let mut raw = reference();
        raw.height = "0".into();
        let json = serde_json::to_value(compute(&raw).unwrap()).unwrap();
        assert_eq!(json["bmi"], "inf");
        assert_eq!(json["bmi_category"], "Obese");
        assert!(json["fat_mass"].is_number());

        raw.weight = "0".into();
        let json = serde_json::to_value(compute(&raw).unwrap()).unwrap();
        assert_eq!(json["bmi"], "NaN");
    }
}

//! Body Mass Index and its category bands.

use std::fmt;

use serde::Serialize;

use crate::constants::{BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN, CM_PER_METER};

/// BMI category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a BMI value.
///
/// Bands are checked in ascending order and a boundary value belongs to the
/// higher band. NaN fails every comparison and lands in [`BmiCategory::Obese`].
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::NormalWeight
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute BMI from weight in kilograms and height in centimeters.
///
/// No range checks: zero height yields infinity (or NaN for zero weight).
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    weight_kg / (height_m * height_m)
}

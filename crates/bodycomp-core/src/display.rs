//! Display strings handed to the presentation layer.
//!
//! Every numeric value is rendered with one decimal place (rounded). A
//! rejected calculation replaces all eight values with the same error text.

use crate::calculator::{BodyComposition, ValidationError};
use crate::constants::{INVALID_INPUT_TEXT, PLACEHOLDER_TEXT};

/// Number of result slots on the form.
pub const RESULT_SLOT_COUNT: usize = 8;

/// Labels of the result slots, in display order.
pub const RESULT_LABELS: [&str; RESULT_SLOT_COUNT] = [
    "Name",
    "Age",
    "BMI",
    "BMI Category",
    "Sum",
    "Body Fat",
    "Fat Mass",
    "Lean Mass",
];

/// State of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    /// Nothing calculated yet.
    Empty,
    /// Values from a successful calculation.
    Computed,
    /// The last calculation was rejected.
    Invalid,
}

/// One labelled result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

impl DisplayField {
    /// `Label: value`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// The eight result slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub status: DisplayStatus,
    pub fields: [DisplayField; RESULT_SLOT_COUNT],
}

impl DisplayFields {
    fn uniform(status: DisplayStatus, text: &str) -> Self {
        Self {
            status,
            fields: RESULT_LABELS.map(|label| DisplayField {
                label,
                value: text.to_string(),
            }),
        }
    }

    /// Placeholders shown before the first calculation.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::uniform(DisplayStatus::Empty, PLACEHOLDER_TEXT)
    }

    /// Uniform error text in every slot.
    #[must_use]
    pub fn invalid() -> Self {
        Self::uniform(DisplayStatus::Invalid, INVALID_INPUT_TEXT)
    }

    /// Format a successful result.
    #[must_use]
    pub fn from_result(result: &BodyComposition) -> Self {
        let mut values = [
            result.name.clone(),
            result.age.to_string(),
            format_one_decimal(result.bmi),
            result.bmi_category.label().to_string(),
            format!("{} mm", format_one_decimal(result.skinfold_sum)),
            format!("{}%", format_one_decimal(result.body_fat_percentage)),
            format!("{} kg", format_one_decimal(result.fat_mass)),
            format!("{} kg", format_one_decimal(result.lean_mass)),
        ];

        Self {
            status: DisplayStatus::Computed,
            fields: std::array::from_fn(|i| DisplayField {
                label: RESULT_LABELS[i],
                value: std::mem::take(&mut values[i]),
            }),
        }
    }

    /// Format the outcome of a calculation.
    #[must_use]
    pub fn from_outcome(outcome: &Result<BodyComposition, ValidationError>) -> Self {
        match outcome {
            Ok(result) => Self::from_result(result),
            Err(_) => Self::invalid(),
        }
    }

    /// Iterate over the slots.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayField> {
        self.fields.iter()
    }
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Render a value with one decimal place, rounding rather than truncating.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

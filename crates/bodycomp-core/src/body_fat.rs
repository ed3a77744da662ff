//! Skinfold-sum body fat estimate and the fat/lean mass split.

use crate::constants::{BODY_FAT_INTERCEPT, BODY_FAT_SLOPE};

/// Sum of skinfold readings in millimeters.
#[must_use]
pub fn skinfold_sum(readings_mm: &[f64]) -> f64 {
    readings_mm.iter().sum()
}

/// Body fat percentage from the skinfold sum: `0.1051 * sum + 2.585`.
#[must_use]
pub fn body_fat_percentage(skinfold_sum_mm: f64) -> f64 {
    BODY_FAT_SLOPE * skinfold_sum_mm + BODY_FAT_INTERCEPT
}

/// Fat mass in kilograms.
#[must_use]
pub fn fat_mass(body_fat_percentage: f64, weight_kg: f64) -> f64 {
    (body_fat_percentage / 100.0) * weight_kg
}

/// Lean mass in kilograms. Always `weight_kg - fat_mass_kg`.
#[must_use]
pub fn lean_mass(weight_kg: f64, fat_mass_kg: f64) -> f64 {
    weight_kg - fat_mass_kg
}

//! Raw form inputs and the parse step that turns them into typed measurements.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::SKINFOLD_SITE_COUNT;

/// Caliper sites, in the order the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    Back,
    Tricep,
    SupraIliac,
    Abdomen,
    Thighs,
    Calves,
}

impl SkinfoldSite {
    /// All sites in form order.
    pub const ALL: [SkinfoldSite; SKINFOLD_SITE_COUNT] = [
        SkinfoldSite::Back,
        SkinfoldSite::Tricep,
        SkinfoldSite::SupraIliac,
        SkinfoldSite::Abdomen,
        SkinfoldSite::Thighs,
        SkinfoldSite::Calves,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkinfoldSite::Back => "Back",
            SkinfoldSite::Tricep => "Tricep",
            SkinfoldSite::SupraIliac => "Supra Iliac",
            SkinfoldSite::Abdomen => "Abdomen",
            SkinfoldSite::Thighs => "Thighs",
            SkinfoldSite::Calves => "Calves",
        }
    }

    /// Position of this site in [`SkinfoldSite::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies an input field, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Name,
    Age,
    Height,
    Weight,
    Skinfold(SkinfoldSite),
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Name => f.write_str("name"),
            InputField::Age => f.write_str("age"),
            InputField::Height => f.write_str("height"),
            InputField::Weight => f.write_str("weight"),
            InputField::Skinfold(site) => write!(f, "{} skinfold", site.label()),
        }
    }
}

/// Unvalidated text exactly as the presentation layer supplies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub name: String,
    pub age: String,
    /// Height in centimeters.
    pub height: String,
    /// Weight in kilograms.
    pub weight: String,
    /// Skinfold readings in millimeters, indexed by [`SkinfoldSite::index`].
    pub skinfolds: [String; SKINFOLD_SITE_COUNT],
}

impl RawInputs {
    /// Text for a single skinfold site.
    #[must_use]
    pub fn skinfold(&self, site: SkinfoldSite) -> &str {
        &self.skinfolds[site.index()]
    }

    /// Replace the text for a single skinfold site.
    pub fn set_skinfold(&mut self, site: SkinfoldSite, value: impl Into<String>) {
        self.skinfolds[site.index()] = value.into();
    }

    /// Text of any field.
    #[must_use]
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Name => &self.name,
            InputField::Age => &self.age,
            InputField::Height => &self.height,
            InputField::Weight => &self.weight,
            InputField::Skinfold(site) => self.skinfold(site),
        }
    }

    /// Mutable text of any field.
    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Name => &mut self.name,
            InputField::Age => &mut self.age,
            InputField::Height => &mut self.height,
            InputField::Weight => &mut self.weight,
            InputField::Skinfold(site) => &mut self.skinfolds[site.index()],
        }
    }
}

/// Typed inputs produced by a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    pub name: String,
    pub age: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Skinfold readings in millimeters, indexed by [`SkinfoldSite::index`].
    pub skinfolds_mm: [f64; SKINFOLD_SITE_COUNT],
}

impl Measurements {
    /// Reading for a single skinfold site.
    #[must_use]
    pub fn skinfold(&self, site: SkinfoldSite) -> f64 {
        self.skinfolds_mm[site.index()]
    }
}

/// Numeric type a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Decimal,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => f.write_str("integer"),
            NumberKind::Decimal => f.write_str("number"),
        }
    }
}

/// Parse one field, trimming surrounding whitespace first.
pub(crate) fn parse_field<T: FromStr>(
    raw: &RawInputs,
    field: InputField,
    kind: NumberKind,
) -> Result<T, (InputField, NumberKind)> {
    raw.field(field).trim().parse().map_err(|_| (field, kind))
}

/// Parse every numeric field, stopping at the first failure.
pub(crate) fn parse_measurements(
    raw: &RawInputs,
) -> Result<Measurements, (InputField, NumberKind)> {
    let age = parse_field(raw, InputField::Age, NumberKind::Integer)?;
    let height_cm = parse_field(raw, InputField::Height, NumberKind::Decimal)?;
    let weight_kg = parse_field(raw, InputField::Weight, NumberKind::Decimal)?;

    let mut skinfolds_mm = [0.0; SKINFOLD_SITE_COUNT];
    for site in SkinfoldSite::ALL {
        skinfolds_mm[site.index()] =
            parse_field(raw, InputField::Skinfold(site), NumberKind::Decimal)?;
    }

    Ok(Measurements {
        name: raw.name.clone(),
        age,
        height_cm,
        weight_kg,
        skinfolds_mm,
    })
}

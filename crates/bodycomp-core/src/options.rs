//! Calculation options.

/// How strictly parsed values are checked before the arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Only parse failures are rejected. Zero or negative values flow through.
    #[default]
    Lenient,
    /// Also reject negative age, non-positive height or weight, negative
    /// skinfold readings and non-finite values.
    Strict,
}

/// Options for a body composition calculation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Range validation policy.
    pub policy: ValidationPolicy,
}

impl Options {
    /// Options with the strict range policy.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            policy: ValidationPolicy::Strict,
        }
    }

    /// Whether range checks are enabled.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.policy == ValidationPolicy::Strict
    }
}

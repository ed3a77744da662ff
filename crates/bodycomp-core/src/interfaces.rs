//! Presentation interfaces.

use crate::calculator::{BodyComposition, ValidationError};
use crate::display::DisplayFields;
use crate::inputs::RawInputs;

/// Source of raw form text, pulled at the moment a calculation is triggered.
pub trait InputSource {
    /// Snapshot of the current field values.
    fn raw_inputs(&self) -> RawInputs;
}

/// Trait for presenting calculation outcomes to the user.
pub trait ResultPresenter {
    /// Present a successful calculation.
    fn present_result(&mut self, result: &BodyComposition, display: &DisplayFields);

    /// Present a rejected calculation.
    ///
    /// `display` already holds the uniform error text in every slot.
    fn present_error(&mut self, error: &ValidationError, display: &DisplayFields);
}

/// Format an outcome and hand it to a presenter.
pub fn present(
    presenter: &mut dyn ResultPresenter,
    outcome: &Result<BodyComposition, ValidationError>,
) {
    let display = DisplayFields::from_outcome(outcome);
    match outcome {
        Ok(result) => presenter.present_result(result, &display),
        Err(err) => presenter.present_error(err, &display),
    }
}

/// Presenter that keeps the last display state (useful for tests and embedding).
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub last: Option<DisplayFields>,
    pub results: usize,
    pub errors: usize,
}

impl ResultPresenter for RecordingPresenter {
    fn present_result(&mut self, _result: &BodyComposition, display: &DisplayFields) {
        self.results += 1;
        self.last = Some(display.clone());
    }

    fn present_error(&mut self, _error: &ValidationError, display: &DisplayFields) {
        self.errors += 1;
        self.last = Some(display.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::display::DisplayStatus;

    struct Fixed(RawInputs);

    impl InputSource for Fixed {
        fn raw_inputs(&self) -> RawInputs {
            self.0.clone()
        }
    }

    #[test]
    fn present_success_then_error() {
        let mut raw = RawInputs {
            name: "Bo".into(),
            age: "50".into(),
            height: "170".into(),
            weight: "70".into(),
            skinfolds: ["5"; 6].map(String::from),
        };
        let mut presenter = RecordingPresenter::default();

        let source = Fixed(raw.clone());
        present(&mut presenter, &compute(&source.raw_inputs()));
        assert_eq!(presenter.results, 1);
        assert_eq!(
            presenter.last.as_ref().map(|d| d.status),
            Some(DisplayStatus::Computed)
        );

        raw.age = "fifty".into();
        let source = Fixed(raw);
        present(&mut presenter, &compute(&source.raw_inputs()));
        assert_eq!(presenter.errors, 1);
        let last = presenter.last.unwrap();
        assert_eq!(last.status, DisplayStatus::Invalid);
        assert!(last.iter().all(|f| f.value == "Invalid input"));
    }
}

//! Form state: field text buffers and keyboard focus.

use bodycomp_core::inputs::{InputField, RawInputs, SkinfoldSite};
use bodycomp_core::interfaces::InputSource;

/// A focusable element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Field(InputField),
    CalculateButton,
}

/// Focus order: personal fields, the six skinfold sites, then the button.
pub const FOCUS_ORDER: [FormSlot; 11] = [
    FormSlot::Field(InputField::Name),
    FormSlot::Field(InputField::Age),
    FormSlot::Field(InputField::Height),
    FormSlot::Field(InputField::Weight),
    FormSlot::Field(InputField::Skinfold(SkinfoldSite::Back)),
    FormSlot::Field(InputField::Skinfold(SkinfoldSite::Tricep)),
    FormSlot::Field(InputField::Skinfold(SkinfoldSite::SupraIliac)),
    FormSlot::Field(InputField::Skinfold(SkinfoldSite::Abdomen)),
    FormSlot::Field(InputField::Skinfold(SkinfoldSite::Thighs)),
    FormSlot::Field(InputField::Skinfold(SkinfoldSite::Calves)),
    FormSlot::CalculateButton,
];

/// Label shown next to a personal-information field.
#[must_use]
pub fn field_label(field: InputField) -> &'static str {
    match field {
        InputField::Name => "Name",
        InputField::Age => "Age",
        InputField::Height => "Height",
        InputField::Weight => "Weight",
        InputField::Skinfold(site) => site.label(),
    }
}

/// Placeholder shown while a field is empty.
#[must_use]
pub fn field_placeholder(field: InputField) -> &'static str {
    match field {
        InputField::Name => "Name",
        InputField::Age => "Age",
        InputField::Height => "cm",
        InputField::Weight => "kg",
        InputField::Skinfold(site) => site.label(),
    }
}

/// Editable form contents.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    inputs: RawInputs,
    focus: usize,
}

impl FormState {
    /// Empty form with focus on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with the given text.
    #[must_use]
    pub fn with_inputs(inputs: RawInputs) -> Self {
        Self { inputs, focus: 0 }
    }

    /// Currently focused slot.
    #[must_use]
    pub fn focused(&self) -> FormSlot {
        FOCUS_ORDER[self.focus]
    }

    /// Whether the given field has focus.
    #[must_use]
    pub fn is_focused(&self, field: InputField) -> bool {
        self.focused() == FormSlot::Field(field)
    }

    /// Move focus forward, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_ORDER.len();
    }

    /// Move focus backward, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
    }

    /// Append a character to the focused field. Ignored on the button.
    pub fn insert_char(&mut self, c: char) {
        if let FormSlot::Field(field) = self.focused() {
            self.inputs.field_mut(field).push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let FormSlot::Field(field) = self.focused() {
            self.inputs.field_mut(field).pop();
        }
    }

    /// Clear the focused field.
    pub fn clear_focused(&mut self) {
        if let FormSlot::Field(field) = self.focused() {
            self.inputs.field_mut(field).clear();
        }
    }

    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: InputField) -> &str {
        self.inputs.field(field)
    }
}

impl InputSource for FormState {
    fn raw_inputs(&self) -> RawInputs {
        self.inputs.clone()
    }
}

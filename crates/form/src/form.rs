//! Contact form state.

use contact_validator::{FieldName, FieldValue, format_phone};
use serde::Serialize;

/// One input of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: FieldName,
    value: FieldValue,
    required: bool,
}

impl FieldSpec {
    fn empty(name: FieldName) -> Self {
        let value = if name.is_checkbox() {
            FieldValue::Checked(false)
        } else {
            FieldValue::default()
        };
        Self {
            name,
            value,
            required: true,
        }
    }

    pub fn name(&self) -> FieldName {
        self.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

/// The five inputs of the contact form, in display order.
///
/// Values are stored as the user sees them: the phone is kept masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FieldSpec>,
}

impl ContactForm {
    /// An empty form: blank inputs, privacy unchecked.
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(FieldSpec::empty).collect(),
        }
    }

    /// Fills a field as if typed, for building forms in code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: FieldName, value: impl Into<FieldValue>) -> Self {
        match value.into() {
            FieldValue::Text(text) => self.input(name, &text),
            FieldValue::Checked(checked) => self.set_value(name, FieldValue::Checked(checked)),
        }
        self
    }

    pub fn field(&self, name: FieldName) -> &FieldSpec {
        &self.fields[Self::index(name)]
    }

    pub fn value(&self, name: FieldName) -> &FieldValue {
        self.field(name).value()
    }

    /// Text of a field; empty for the checkbox.
    pub fn text(&self, name: FieldName) -> &str {
        self.value(name).text()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Fields submission has to validate, in display order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }

    /// Applies a keystroke's worth of input to a text field.
    ///
    /// The phone is re-masked on every input.
    pub fn input(&mut self, name: FieldName, raw: &str) {
        let text = if name == FieldName::Phone {
            format_phone(raw)
        } else {
            raw.to_string()
        };
        self.set_value(name, FieldValue::Text(text));
    }

    /// Sets the privacy checkbox.
    pub fn set_privacy_accepted(&mut self, checked: bool) {
        self.set_value(FieldName::Privacy, FieldValue::Checked(checked));
    }

    /// Stores a value as-is.
    pub fn set_value(&mut self, name: FieldName, value: FieldValue) {
        self.fields[Self::index(name)].value = value;
    }

    /// Clears every value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether every field is at its initial value.
    pub fn is_pristine(&self) -> bool {
        *self == Self::new()
    }

    /// Payload handed to the transport.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.text(FieldName::Name).trim().to_string(),
            email: self.text(FieldName::Email).trim().to_string(),
            phone: self.text(FieldName::Phone).to_string(),
            message: self.text(FieldName::Message).trim().to_string(),
            privacy_accepted: self.value(FieldName::Privacy).is_checked(),
        }
    }

    fn index(name: FieldName) -> usize {
        // `fields` is built from `FieldName::ALL`, so the position is the index.
        FieldName::ALL
            .iter()
            .position(|candidate| *candidate == name)
            .unwrap_or_default()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// What gets delivered: trimmed text values and the consent flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub privacy_accepted: bool,
}

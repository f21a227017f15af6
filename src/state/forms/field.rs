//! Form field value objects

/// What kind of input a field accepts, and how it validates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
}

impl FormField {
    pub fn new(id: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required,
            value: String::new(),
        }
    }

    /// Create a required single-line text field
    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text, true)
    }

    /// Create an optional single-line text field
    pub fn optional_text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text, false)
    }

    /// Create an email field; `required` follows the form's policy
    pub fn email(id: &str, label: &str, required: bool) -> Self {
        Self::new(id, label, FieldKind::Email, required)
    }

    /// Create a required multiline text field
    pub fn multiline(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Multiline, true)
    }

    /// The id of the error slot paired with this field in the page contract
    #[allow(dead_code)]
    pub fn error_slot(&self) -> String {
        format!("{}-error", self.id)
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed, as validation sees it
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

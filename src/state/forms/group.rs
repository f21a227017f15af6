//! Mutually exclusive choice groups (the radio-button analog)

/// A set of options sharing one logical choice. Valid when required means
/// exactly one option is selected.
#[derive(Debug, Clone)]
pub struct ChoiceGroup {
    pub name: String,
    pub label: String,
    pub options: Vec<String>,
    pub required: bool,
    selected: Option<usize>,
}

impl ChoiceGroup {
    pub fn new(name: &str, label: &str, options: &[&str], required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            required,
            selected: None,
        }
    }

    /// Error slot for the whole group, keyed by the shared name
    #[allow(dead_code)]
    pub fn error_slot(&self) -> String {
        format!("{}-error", self.name)
    }

    /// Select an option by index. Out-of-range indices are ignored and
    /// reported as such, so callers do not treat them as edits.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Reset to no selection
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

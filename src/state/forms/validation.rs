//! Validation results and per-slot error tracking

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// local-part@domain.tld with a two-letter-minimum TLD
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check an email address for valid shape
pub fn is_valid_email(address: &str) -> bool {
    email_regex().is_match(address)
}

/// Currently displayed per-slot errors, keyed by field id or group name.
///
/// A slot holds a message iff that field last failed validation and no
/// subsequent edit cleared it.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    entries: HashMap<String, String>,
}

impl ValidationState {
    pub fn set_error(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(id.into(), message.into());
    }

    pub fn clear_error(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one full validation pass: aggregate validity plus the
/// (identifier, message) pairs shown, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<(String, String)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.errors.push((id.into(), message.into()));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Identifier of the first invalid field/group, for moving focus
    pub fn first_invalid(&self) -> Option<&str> {
        self.errors.first().map(|(id, _)| id.as_str())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

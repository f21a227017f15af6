//! Per-form validators gating simulated submission.
//!
//! Each form is self-contained: it binds its element ids once at attach time,
//! runs a full validation pass on submit, and clears a field's error as soon
//! as the user edits that field. Checks never short-circuit, so one pass
//! reports every invalid field.

use super::binding::{BindingError, FormBinding, PageElements};
use super::field::FormField;
use super::group::ChoiceGroup;
use super::validation::{is_valid_email, ValidationReport, ValidationState};
use crate::delivery::{DeliverySink, Submission};

/// Generic status text shown when any field fails
const CORRECT_ERRORS: &str = "Please correct the errors above and try again.";

/// Styling class of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The single success/error banner shown after a submit attempt. One slot per
/// form, overwritten on every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.to_string(),
        }
    }

    fn error(text: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.to_string(),
        }
    }
}

/// Recognized event kinds a form reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Character typed into the active field
    Input(char),
    /// Backspace in the active field
    Backspace,
    /// Option `n` of the form's choice group picked
    Change(usize),
    /// Submit requested
    Submit,
}

/// Required text field check with field-specific wording
fn check_required(field: &FormField, message: &str, report: &mut ValidationReport) {
    if field.required && field.trimmed().is_empty() {
        report.add(field.id.clone(), message);
    }
}

/// Email check: presence per the field's required flag, shape whenever a
/// value is given
fn check_email(field: &FormField, report: &mut ValidationReport) {
    let value = field.trimmed();
    if value.is_empty() {
        if field.required {
            report.add(field.id.clone(), "Email is required.");
        }
    } else if !is_valid_email(value) {
        report.add(field.id.clone(), "Please enter a valid email address.");
    }
}

/// Required group check, attached to the group rather than a single input
fn check_group(group: &ChoiceGroup, message: &str, report: &mut ValidationReport) {
    if group.required && !group.has_selection() {
        report.add(group.name.clone(), message);
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

// Contact form: name -> email -> message, subject carried but unchecked
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub errors: ValidationState,
    pub status: Option<StatusMessage>,
    pub active_field_index: usize,
    binding: FormBinding,
}

impl ContactForm {
    pub const ROOT: &'static str = "contact-form";
    pub const STATUS_SLOT: &'static str = "form-status";
    const SUCCESS: &'static str = "Message sent successfully! Thank you for reaching out.";

    /// Bind against the page; does not attach when an expected element is absent
    pub fn attach(page: &PageElements) -> Result<Self, BindingError> {
        let binding = FormBinding::resolve(
            page,
            Self::ROOT,
            Self::STATUS_SLOT,
            &["name", "email", "subject", "message"],
            &[],
        )?;
        Ok(Self {
            name: FormField::text("name", "Name"),
            email: FormField::email("email", "Email", true),
            subject: FormField::optional_text("subject", "Subject"),
            message: FormField::multiline("message", "Message"),
            errors: ValidationState::default(),
            status: None,
            active_field_index: 0,
            binding,
        })
    }

    /// One full validation pass over all fields, in fixed order
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_required(&self.name, "Name is required.", &mut report);
        check_email(&self.email, &mut report);
        check_required(&self.message, "Message cannot be empty.", &mut report);
        report
    }

    /// Handle a submit attempt: clear prior errors, validate, then either
    /// deliver and reset or surface errors and focus the first invalid field
    pub fn submit(&mut self, sink: &mut dyn DeliverySink) -> bool {
        self.status = None;
        self.errors.clear_all();

        let report = self.validate();
        for (id, message) in &report.errors {
            self.errors.set_error(id.clone(), message.clone());
        }

        if self.errors.is_empty() {
            sink.deliver(&Submission {
                form: self.binding.root.clone(),
                fields: vec![
                    ("Name".to_string(), self.name.trimmed().to_string()),
                    ("Email".to_string(), self.email.trimmed().to_string()),
                    ("Subject".to_string(), self.subject.trimmed().to_string()),
                    ("Message".to_string(), self.message.trimmed().to_string()),
                ],
            });
            self.status = Some(StatusMessage::success(Self::SUCCESS));
            self.reset();
            true
        } else {
            if let Some(first) = report.first_invalid() {
                self.focus(first);
            }
            self.status = Some(StatusMessage::error(CORRECT_ERRORS));
            false
        }
    }

    /// Type into the active field, clearing that field's error on edit
    pub fn input_char(&mut self, c: char) {
        let field = self.active_field_mut();
        field.push_char(c);
        let id = field.id.clone();
        self.errors.clear_error(&id);
    }

    /// Backspace in the active field, clearing that field's error on edit
    pub fn backspace(&mut self) {
        let field = self.active_field_mut();
        field.pop_char();
        let id = field.id.clone();
        self.errors.clear_error(&id);
    }

    pub fn apply(&mut self, event: FormEvent, sink: &mut dyn DeliverySink) {
        match event {
            FormEvent::Input(c) => self.input_char(c),
            FormEvent::Backspace => self.backspace(),
            // No choice group on this form
            FormEvent::Change(_) => {}
            FormEvent::Submit => {
                self.submit(sink);
            }
        }
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            _ => None,
        }
    }

    fn active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.subject,
            _ => &mut self.message,
        }
    }

    fn focus(&mut self, id: &str) {
        self.active_field_index = match id {
            "name" => 0,
            "email" => 1,
            "message" => 3,
            _ => self.active_field_index,
        };
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.active_field_index = 0;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
}

// Survey form: email -> satisfaction group -> suggestions
#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub email: FormField,
    pub satisfaction: ChoiceGroup,
    pub suggestions: FormField,
    pub errors: ValidationState,
    pub status: Option<StatusMessage>,
    pub active_field_index: usize,
    binding: FormBinding,
}

impl SurveyForm {
    pub const ROOT: &'static str = "survey-form";
    pub const STATUS_SLOT: &'static str = "survey-form-status";
    const SUCCESS: &'static str = "Thank you for your valuable feedback!";

    /// Index of the satisfaction group in the traversal order
    pub const GROUP_INDEX: usize = 1;

    pub fn attach(page: &PageElements) -> Result<Self, BindingError> {
        let binding = FormBinding::resolve(
            page,
            Self::ROOT,
            Self::STATUS_SLOT,
            &["survey-email", "suggestions"],
            &["satisfaction"],
        )?;
        Ok(Self {
            email: FormField::email("survey-email", "Email (optional)", false),
            satisfaction: ChoiceGroup::new(
                "satisfaction",
                "How satisfied are you?",
                &["Very satisfied", "Satisfied", "Neutral", "Dissatisfied"],
                true,
            ),
            suggestions: FormField::multiline("suggestions", "Suggestions"),
            errors: ValidationState::default(),
            status: None,
            active_field_index: 0,
            binding,
        })
    }

    /// One full validation pass: optional email must be shaped right when
    /// given, the group needs a selection, suggestions must be non-empty
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_email(&self.email, &mut report);
        check_group(
            &self.satisfaction,
            "Please select your satisfaction level.",
            &mut report,
        );
        check_required(&self.suggestions, "Suggestions cannot be empty.", &mut report);
        report
    }

    pub fn submit(&mut self, sink: &mut dyn DeliverySink) -> bool {
        self.status = None;
        self.errors.clear_all();

        let report = self.validate();
        for (id, message) in &report.errors {
            self.errors.set_error(id.clone(), message.clone());
        }

        if self.errors.is_empty() {
            sink.deliver(&Submission {
                form: self.binding.root.clone(),
                fields: vec![
                    ("Email".to_string(), self.email.trimmed().to_string()),
                    (
                        "Satisfaction".to_string(),
                        self.satisfaction.selected_label().unwrap_or("").to_string(),
                    ),
                    (
                        "Suggestions".to_string(),
                        self.suggestions.trimmed().to_string(),
                    ),
                ],
            });
            self.status = Some(StatusMessage::success(Self::SUCCESS));
            self.reset();
            true
        } else {
            if let Some(first) = report.first_invalid() {
                self.focus(first);
            }
            self.status = Some(StatusMessage::error(CORRECT_ERRORS));
            false
        }
    }

    /// Type into the active text field; typing on the group row does nothing
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_text_field_mut() else {
            return;
        };
        field.push_char(c);
        let id = field.id.clone();
        self.errors.clear_error(&id);
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.active_text_field_mut() else {
            return;
        };
        field.pop_char();
        let id = field.id.clone();
        self.errors.clear_error(&id);
    }

    /// Pick a satisfaction option. The group's error clears only when the
    /// pick actually changed the selection; an ignored index is not an edit.
    pub fn select_option(&mut self, index: usize) {
        if self.satisfaction.select(index) {
            let slot = self.satisfaction.name.clone();
            self.errors.clear_error(&slot);
        }
    }

    pub fn apply(&mut self, event: FormEvent, sink: &mut dyn DeliverySink) {
        match event {
            FormEvent::Input(c) => self.input_char(c),
            FormEvent::Backspace => self.backspace(),
            FormEvent::Change(index) => self.select_option(index),
            FormEvent::Submit => {
                self.submit(sink);
            }
        }
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            2 => Some(&self.suggestions),
            _ => None,
        }
    }

    fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            2 => Some(&mut self.suggestions),
            _ => None,
        }
    }

    fn focus(&mut self, id: &str) {
        self.active_field_index = match id {
            "survey-email" => 0,
            "satisfaction" => Self::GROUP_INDEX,
            "suggestions" => 2,
            _ => self.active_field_index,
        };
    }

    fn reset(&mut self) {
        self.email.clear();
        self.satisfaction.clear();
        self.suggestions.clear();
        self.active_field_index = 0;
    }
}

impl Form for SurveyForm {
    fn field_count(&self) -> usize {
        3
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::MockDeliverySink;

    fn contact_page() -> PageElements {
        PageElements::new(&[
            "contact-form",
            "form-status",
            "name",
            "name-error",
            "email",
            "email-error",
            "subject",
            "subject-error",
            "message",
            "message-error",
        ])
    }

    fn survey_page() -> PageElements {
        PageElements::new(&[
            "survey-form",
            "survey-form-status",
            "survey-email",
            "survey-email-error",
            "satisfaction-error",
            "suggestions",
            "suggestions-error",
        ])
    }

    fn silent_sink() -> MockDeliverySink {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver().times(0);
        sink
    }

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_attach_fails_without_status_slot() {
            let page = PageElements::new(&["contact-form", "name", "name-error"]);
            let err = ContactForm::attach(&page).unwrap_err();
            assert_eq!(err, BindingError::MissingElement("form-status".into()));
        }

        #[test]
        fn test_blank_required_field_errors_exactly_that_slot() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            type_into(&mut form.email, "jane@example.com");
            type_into(&mut form.message, "Hello");

            let ok = form.submit(&mut silent_sink());
            assert!(!ok);
            assert_eq!(form.errors.error("name"), Some("Name is required."));
            assert!(form.errors.error("email").is_none());
            assert!(form.errors.error("message").is_none());
        }

        #[test]
        fn test_all_errors_reported_in_one_pass() {
            let form = ContactForm::attach(&contact_page()).unwrap();
            let report = form.validate();
            assert_eq!(
                report.errors,
                vec![
                    ("name".to_string(), "Name is required.".to_string()),
                    ("email".to_string(), "Email is required.".to_string()),
                    ("message".to_string(), "Message cannot be empty.".to_string()),
                ]
            );
        }

        #[test]
        fn test_invalid_email_shape_is_reported() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            type_into(&mut form.name, "Jane");
            type_into(&mut form.email, "a@b");
            type_into(&mut form.message, "Hello");

            form.submit(&mut silent_sink());
            assert_eq!(
                form.errors.error("email"),
                Some("Please enter a valid email address.")
            );
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            type_into(&mut form.name, "   ");
            let report = form.validate();
            assert_eq!(report.first_invalid(), Some("name"));
        }

        #[test]
        fn test_valid_submit_delivers_and_resets() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            type_into(&mut form.name, "Jane");
            type_into(&mut form.email, "jane@example.com");
            type_into(&mut form.message, "Hello");

            let mut sink = MockDeliverySink::new();
            sink.expect_deliver()
                .withf(|s| {
                    s.form == "contact-form"
                        && s.fields
                            == vec![
                                ("Name".to_string(), "Jane".to_string()),
                                ("Email".to_string(), "jane@example.com".to_string()),
                                ("Subject".to_string(), String::new()),
                                ("Message".to_string(), "Hello".to_string()),
                            ]
                })
                .times(1)
                .return_const(());

            let ok = form.submit(&mut sink);
            assert!(ok);
            assert_eq!(
                form.status,
                Some(StatusMessage {
                    kind: StatusKind::Success,
                    text: "Message sent successfully! Thank you for reaching out.".to_string(),
                })
            );
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.message.as_text(), "");
            assert!(form.errors.is_empty());
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_invalid_submit_sets_error_status_and_focuses_first_invalid() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            type_into(&mut form.name, "Jane");
            form.active_field_index = 3;

            form.submit(&mut silent_sink());
            assert_eq!(
                form.status.as_ref().map(|s| s.kind),
                Some(StatusKind::Error)
            );
            assert_eq!(
                form.status.as_ref().map(|s| s.text.as_str()),
                Some("Please correct the errors above and try again.")
            );
            // First invalid field is email (name passed)
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_editing_clears_only_that_fields_error() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            form.submit(&mut silent_sink());
            assert!(form.errors.error("name").is_some());
            assert!(form.errors.error("email").is_some());

            form.set_active_field(0);
            form.input_char('J');
            assert!(form.errors.error("name").is_none());
            assert!(form.errors.error("email").is_some());
            assert!(form.errors.error("message").is_some());
        }

        #[test]
        fn test_backspace_also_clears_error() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            form.submit(&mut silent_sink());
            form.set_active_field(1);
            form.backspace();
            assert!(form.errors.error("email").is_none());
        }

        #[test]
        fn test_validate_is_idempotent() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            type_into(&mut form.email, "not-an-email");
            assert_eq!(form.validate(), form.validate());
        }

        #[test]
        fn test_status_is_overwritten_not_appended() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            form.submit(&mut silent_sink());
            assert_eq!(
                form.status.as_ref().map(|s| s.kind),
                Some(StatusKind::Error)
            );

            type_into(&mut form.name, "Jane");
            type_into(&mut form.email, "jane@example.com");
            type_into(&mut form.message, "Hello");
            let mut sink = MockDeliverySink::new();
            sink.expect_deliver().times(1).return_const(());
            form.submit(&mut sink);
            assert_eq!(
                form.status.as_ref().map(|s| s.kind),
                Some(StatusKind::Success)
            );
        }

        #[test]
        fn test_field_traversal_wraps() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field(), 0);
            form.prev_field();
            assert_eq!(form.active_field(), 3);
        }

        #[test]
        fn test_apply_routes_events() {
            let mut form = ContactForm::attach(&contact_page()).unwrap();
            let mut sink = silent_sink();
            form.apply(FormEvent::Input('J'), &mut sink);
            assert_eq!(form.name.as_text(), "J");
            form.apply(FormEvent::Backspace, &mut sink);
            assert_eq!(form.name.as_text(), "");
            form.apply(FormEvent::Submit, &mut sink);
            assert!(form.errors.error("name").is_some());
        }
    }

    mod survey {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_attach_fails_without_group_error_slot() {
            let page = PageElements::new(&[
                "survey-form",
                "survey-form-status",
                "survey-email",
                "survey-email-error",
                "suggestions",
                "suggestions-error",
            ]);
            let err = SurveyForm::attach(&page).unwrap_err();
            assert_eq!(
                err,
                BindingError::MissingElement("satisfaction-error".into())
            );
        }

        #[test]
        fn test_missing_group_selection_errors_the_group() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            type_into(&mut form.email, "jane@example.com");
            type_into(&mut form.suggestions, "More terminals");

            let ok = form.submit(&mut silent_sink());
            assert!(!ok);
            assert_eq!(
                form.errors.error("satisfaction"),
                Some("Please select your satisfaction level.")
            );
            assert!(form.errors.error("survey-email").is_none());
            assert!(form.errors.error("suggestions").is_none());
            assert_eq!(form.active_field_index, SurveyForm::GROUP_INDEX);
        }

        #[test]
        fn test_email_is_optional_but_checked_when_given() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            form.select_option(0);
            type_into(&mut form.suggestions, "More terminals");

            // Empty email passes
            assert!(form.validate().is_valid());

            // Malformed email fails
            type_into(&mut form.email, "abc");
            let report = form.validate();
            assert_eq!(report.first_invalid(), Some("survey-email"));
        }

        #[test]
        fn test_change_event_clears_group_error() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            form.submit(&mut silent_sink());
            assert!(form.errors.error("satisfaction").is_some());

            form.apply(FormEvent::Change(2), &mut silent_sink());
            assert!(form.errors.error("satisfaction").is_none());
            // Other errors stay untouched
            assert!(form.errors.error("suggestions").is_some());
        }

        #[test]
        fn test_out_of_range_change_keeps_group_error() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            form.submit(&mut silent_sink());
            assert!(form.errors.error("satisfaction").is_some());

            // Digit keys past the option count reach the form as Change
            // events; an ignored index must not count as an edit
            form.apply(FormEvent::Change(8), &mut silent_sink());
            assert!(!form.satisfaction.has_selection());
            assert_eq!(
                form.errors.error("satisfaction"),
                Some("Please select your satisfaction level.")
            );
        }

        #[test]
        fn test_valid_submit_delivers_and_resets_selection() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            form.select_option(1);
            type_into(&mut form.suggestions, "More terminals");

            let mut sink = MockDeliverySink::new();
            sink.expect_deliver()
                .withf(|s| {
                    s.form == "survey-form"
                        && s.fields
                            == vec![
                                ("Email".to_string(), String::new()),
                                ("Satisfaction".to_string(), "Satisfied".to_string()),
                                ("Suggestions".to_string(), "More terminals".to_string()),
                            ]
                })
                .times(1)
                .return_const(());

            let ok = form.submit(&mut sink);
            assert!(ok);
            assert_eq!(
                form.status.as_ref().map(|s| s.text.as_str()),
                Some("Thank you for your valuable feedback!")
            );
            assert!(!form.satisfaction.has_selection());
            assert_eq!(form.suggestions.as_text(), "");
        }

        #[test]
        fn test_typing_on_group_row_is_noop() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            form.set_active_field(SurveyForm::GROUP_INDEX);
            form.input_char('x');
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.suggestions.as_text(), "");
        }

        #[test]
        fn test_validate_is_idempotent() {
            let form = SurveyForm::attach(&survey_page()).unwrap();
            assert_eq!(form.validate(), form.validate());
        }

        #[test]
        fn test_validation_order_is_email_group_suggestions() {
            let mut form = SurveyForm::attach(&survey_page()).unwrap();
            type_into(&mut form.email, "bad");
            let report = form.validate();
            let ids: Vec<&str> = report.errors.iter().map(|(id, _)| id.as_str()).collect();
            assert_eq!(ids, vec!["survey-email", "satisfaction", "suggestions"]);
        }
    }
}

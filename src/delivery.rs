//! Simulated delivery endpoint for validated form data.
//!
//! The validator's contract ends at "produced a validated field set"; a real
//! deployment would post it somewhere. Here the sink logs each value.

use tracing::info;

/// A validated field set handed off for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Root id of the form that produced this submission
    pub form: String,
    /// (label, value) pairs in field order
    pub fields: Vec<(String, String)>,
}

/// Trait for delivery targets, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait DeliverySink {
    fn deliver(&mut self, submission: &Submission);
}

/// Logs the validated field set instead of sending it anywhere
#[derive(Debug, Default)]
pub struct LogDelivery;

impl DeliverySink for LogDelivery {
    fn deliver(&mut self, submission: &Submission) {
        info!(form = %submission.form, "form is valid, data would be sent here");
        for (label, value) in &submission.fields {
            info!(form = %submission.form, "{label}: {value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_delivery_accepts_submission() {
        let mut sink = LogDelivery;
        sink.deliver(&Submission {
            form: "contact-form".to_string(),
            fields: vec![("Name".to_string(), "Jane".to_string())],
        });
    }

    #[test]
    fn test_mock_sink_records_call() {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver()
            .withf(|s| s.form == "survey-form")
            .times(1)
            .return_const(());
        sink.deliver(&Submission {
            form: "survey-form".to_string(),
            fields: vec![],
        });
    }
}

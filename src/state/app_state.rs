//! Application state definitions

use super::forms::{ContactForm, PageElements, SurveyForm};
use tracing::warn;

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Projects,
    Contact,
    Survey,
}

impl View {
    /// Navigation order, as shown in the sidebar
    pub const ALL: &'static [View] = &[
        View::Home,
        View::About,
        View::Projects,
        View::Contact,
        View::Survey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Projects => "Projects",
            View::Contact => "Contact",
            View::Survey => "Survey",
        }
    }
}

/// A portfolio project card
#[derive(Debug, Clone, Copy)]
pub struct ProjectCard {
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static str,
}

/// Static portfolio content shown on the Projects page
pub const PROJECT_CARDS: &[ProjectCard] = &[
    ProjectCard {
        name: "Community Health Dashboard",
        summary: "Regional clinic reporting with offline-first data entry",
        stack: "Rust, SQLite",
    },
    ProjectCard {
        name: "Market Price Tracker",
        summary: "Daily commodity prices for local traders, SMS digests",
        stack: "Rust, Axum",
    },
    ProjectCard {
        name: "Student Records CLI",
        summary: "Enrollment and grading toolkit for a teachers' college",
        stack: "Rust, CSV",
    },
];

/// The fun fact revealed on the About page
pub const FUN_FACT: &str =
    "I once debugged a production outage from a bus on the Dodoma-Dar es Salaam highway.";

/// Elements the contact page provides, per the page markup contract
fn contact_page_elements() -> PageElements {
    PageElements::new(&[
        ContactForm::ROOT,
        ContactForm::STATUS_SLOT,
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

/// Elements the survey page provides
fn survey_page_elements() -> PageElements {
    PageElements::new(&[
        SurveyForm::ROOT,
        SurveyForm::STATUS_SLOT,
        "survey-email",
        "survey-email-error",
        "satisfaction-error",
        "suggestions",
        "suggestions-error",
    ])
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub nav_index: usize,

    // About page
    pub fun_fact_revealed: bool,

    // Form validators; None when a page failed its element contract
    pub contact: Option<ContactForm>,
    pub survey: Option<SurveyForm>,
}

impl AppState {
    /// Build state and attach a validator per form whose page satisfies the
    /// element contract. A failed binding is reported once, then skipped.
    pub fn new() -> Self {
        let contact = match ContactForm::attach(&contact_page_elements()) {
            Ok(form) => Some(form),
            Err(err) => {
                warn!(%err, "contact form validator not attached");
                None
            }
        };
        let survey = match SurveyForm::attach(&survey_page_elements()) {
            Ok(form) => Some(form),
            Err(err) => {
                warn!(%err, "survey form validator not attached");
                None
            }
        };

        Self {
            current_view: View::default(),
            nav_index: 0,
            fun_fact_revealed: false,
            contact,
            survey,
        }
    }

    /// Navigate to a view, keeping the sidebar highlight in sync
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
        self.nav_index = View::ALL.iter().position(|v| *v == view).unwrap_or(0);
    }

    /// Move the nav highlight down and follow it
    pub fn nav_next(&mut self) {
        self.nav_index = (self.nav_index + 1) % View::ALL.len();
        self.current_view = View::ALL[self.nav_index];
    }

    /// Move the nav highlight up and follow it
    pub fn nav_prev(&mut self) {
        if self.nav_index == 0 {
            self.nav_index = View::ALL.len() - 1;
        } else {
            self.nav_index -= 1;
        }
        self.current_view = View::ALL[self.nav_index];
    }

    /// Toggle the About page fun fact
    pub fn toggle_fun_fact(&mut self) {
        self.fun_fact_revealed = !self.fun_fact_revealed;
    }

    /// Button text for the fun fact reveal
    pub fn fun_fact_button_label(&self) -> &'static str {
        if self.fun_fact_revealed {
            "Okay, hide it!"
        } else {
            "Click to reveal!"
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::new();
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.nav_index, 0);
    }

    #[test]
    fn test_both_validators_attach_on_complete_pages() {
        let state = AppState::new();
        assert!(state.contact.is_some());
        assert!(state.survey.is_some());
    }

    #[test]
    fn test_navigate_syncs_nav_highlight() {
        let mut state = AppState::new();
        state.navigate(View::Contact);
        assert_eq!(state.current_view, View::Contact);
        assert_eq!(state.nav_index, 3);
    }

    #[test]
    fn test_nav_next_wraps() {
        let mut state = AppState::new();
        state.navigate(View::Survey);
        state.nav_next();
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn test_nav_prev_wraps() {
        let mut state = AppState::new();
        state.nav_prev();
        assert_eq!(state.current_view, View::Survey);
    }

    #[test]
    fn test_fun_fact_toggle_flips_button_label() {
        let mut state = AppState::new();
        assert_eq!(state.fun_fact_button_label(), "Click to reveal!");
        state.toggle_fun_fact();
        assert!(state.fun_fact_revealed);
        assert_eq!(state.fun_fact_button_label(), "Okay, hide it!");
        state.toggle_fun_fact();
        assert!(!state.fun_fact_revealed);
    }
}

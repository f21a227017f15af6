//! Application wiring and key handling

use crate::config::PortfolioConfig;
use crate::delivery::LogDelivery;
use crate::greeting::{self, Greeting};
use crate::state::{AppState, Form, FormEvent, SurveyForm, View};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Active color theme
    pub theme: Theme,
    /// Persisted preferences (currently just the theme flag)
    config: PortfolioConfig,
    /// Sink receiving validated form data
    delivery: LogDelivery,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, restoring the persisted theme
    pub fn new() -> Self {
        let config = PortfolioConfig::load().unwrap_or_else(|err| {
            warn!(%err, "failed to load config, using defaults");
            PortfolioConfig::default()
        });
        let theme = Theme::from_config(config.theme.as_deref());

        Self {
            state: AppState::new(),
            theme,
            config,
            delivery: LogDelivery,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Greeting banner for the home page
    pub fn greeting(&self) -> Greeting {
        greeting::now()
    }

    /// Flip the theme and persist the new flag immediately
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.config.theme = Some(self.theme.as_config_str().to_string());
        if let Err(err) = self.config.save() {
            warn!(%err, "failed to persist theme preference");
        }
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            View::Survey => self.handle_survey_key(key),
            _ => self.handle_browse_key(key),
        }
        Ok(())
    }

    /// Keys on the non-form pages (Home, About, Projects)
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.nav_next(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.state.nav_prev(),
            KeyCode::Char('f') | KeyCode::Enter
                if self.state.current_view == View::About =>
            {
                self.state.toggle_fun_fact();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.state.navigate(View::ALL[index]);
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        // Page-level keys first, so they work even without an attached validator
        match key.code {
            KeyCode::Esc => {
                self.state.navigate(View::Home);
                return;
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_theme();
                return;
            }
            _ => {}
        }

        let Some(form) = self.state.contact.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.apply(FormEvent::Submit, &mut self.delivery);
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                let multiline = form
                    .field(form.active_field())
                    .is_some_and(|f| f.is_multiline());
                if multiline {
                    form.apply(FormEvent::Input('\n'), &mut self.delivery);
                } else {
                    form.apply(FormEvent::Submit, &mut self.delivery);
                }
            }
            KeyCode::Backspace => form.apply(FormEvent::Backspace, &mut self.delivery),
            KeyCode::Char(c) => form.apply(FormEvent::Input(c), &mut self.delivery),
            _ => {}
        }
    }

    fn handle_survey_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.navigate(View::Home);
                return;
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_theme();
                return;
            }
            _ => {}
        }

        let Some(form) = self.state.survey.as_mut() else {
            return;
        };

        let on_group = form.active_field() == SurveyForm::GROUP_INDEX;
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.apply(FormEvent::Submit, &mut self.delivery);
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Option picking on the satisfaction row
            KeyCode::Char(c @ '1'..='9') if on_group => {
                let index = c as usize - '1' as usize;
                form.apply(FormEvent::Change(index), &mut self.delivery);
            }
            KeyCode::Char(' ') | KeyCode::Right if on_group => {
                let next = form
                    .satisfaction
                    .selected()
                    .map(|i| (i + 1) % form.satisfaction.options.len())
                    .unwrap_or(0);
                form.apply(FormEvent::Change(next), &mut self.delivery);
            }
            KeyCode::Left if on_group => {
                let len = form.satisfaction.options.len();
                let prev = form
                    .satisfaction
                    .selected()
                    .map(|i| (i + len - 1) % len)
                    .unwrap_or(0);
                form.apply(FormEvent::Change(prev), &mut self.delivery);
            }
            KeyCode::Enter => {
                let multiline = form
                    .field(form.active_field())
                    .is_some_and(|f| f.is_multiline());
                if multiline {
                    form.apply(FormEvent::Input('\n'), &mut self.delivery);
                } else {
                    form.apply(FormEvent::Submit, &mut self.delivery);
                }
            }
            KeyCode::Backspace => form.apply(FormEvent::Backspace, &mut self.delivery),
            KeyCode::Char(c) => form.apply(FormEvent::Input(c), &mut self.delivery),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

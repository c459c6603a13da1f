//! Application state and core logic

use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{SignupField, SignupForm};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formstate::config::DemoConfig;
use formstate::FieldKey;
use tracing::{info, warn};

/// Main application struct
pub struct App {
    /// The form being edited
    pub signup: SignupForm,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// JSON of the last accepted submission
    pub submitted: Option<serde_json::Value>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &DemoConfig) -> Self {
        let options = config.apply(crate::state::signup_options());
        Self {
            signup: SignupForm::new(options),
            quit: false,
            status_message: None,
            submitted: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => {
                self.signup.form.reset();
                self.submitted = None;
                self.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Tab | KeyCode::Down => self.signup.next_field()?,
            KeyCode::BackTab | KeyCode::Up => self.signup.prev_field()?,
            KeyCode::Enter => self.signup.next_field()?,
            KeyCode::Backspace => self.signup.backspace()?,
            KeyCode::Char(c) if !shortcut => {
                self.status_message = None;
                self.signup.input_char(c)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Accept the form when every validator passes
    fn submit(&mut self) {
        let form = &mut self.signup.form;
        if form.has_errors() {
            // Surface messages for fields left empty, which change events skip
            form.validate();
            let invalid: Vec<&str> = SignupField::ALL
                .iter()
                .filter(|field| form.errors().has_error(**field))
                .map(|field| field.label())
                .collect();
            warn!(fields = ?invalid, "submit rejected");
            self.status_message = Some("Fix the highlighted fields".to_string());
            return;
        }

        let snapshot = form.snapshot();
        info!(%snapshot, "form submitted");
        self.status_message = Some("Submitted".to_string());
        self.submitted = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formstate::FieldValue;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_esc_quits() {
        let mut app = App::new(&DemoConfig::default());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_submit_valid_form() {
        let mut app = App::new(&DemoConfig::default());
        type_str(&mut app, "a@b.co");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "30");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        ctrl(&mut app, 's');

        assert_eq!(app.status_message.as_deref(), Some("Submitted"));
        assert_eq!(
            app.submitted,
            Some(serde_json::json!({
                "email": "a@b.co",
                "age": "30",
                "newsletter": true,
            }))
        );
    }

    #[test]
    fn test_submit_invalid_form_surfaces_empty_fields() {
        let mut app = App::new(&DemoConfig::default());
        ctrl(&mut app, 's');
        assert!(app.submitted.is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Fix the highlighted fields")
        );
        // Empty fields skip validation, so nothing is flagged yet
        assert!(app.signup.form.errors().is_empty());

        type_str(&mut app, "x");
        ctrl(&mut app, 's');
        assert!(app.signup.form.errors().has_error(SignupField::Email));
    }

    #[test]
    fn test_submit_with_validate_falsy_flags_everything() {
        let config = DemoConfig {
            validate_falsy: Some(true),
            ..Default::default()
        };
        let mut app = App::new(&config);
        ctrl(&mut app, 's');
        assert!(app.signup.form.errors().has_error(SignupField::Email));
        assert!(app.signup.form.errors().has_error(SignupField::Age));
    }

    #[test]
    fn test_ctrl_r_resets() {
        let mut app = App::new(&DemoConfig::default());
        type_str(&mut app, "oops");
        assert!(app.signup.form.errors().has_error(SignupField::Email));
        ctrl(&mut app, 'r');
        assert_eq!(
            app.signup.form.value(SignupField::Email),
            &FieldValue::from("")
        );
        assert!(app.signup.form.errors().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut app = App::new(&DemoConfig::default());
        ctrl(&mut app, 'x');
        assert!(!app.signup.form.is_dirty());
    }

    #[test]
    fn test_update_on_change_off_defers_errors() {
        let config = DemoConfig {
            update_on_change: Some(false),
            ..Default::default()
        };
        let mut app = App::new(&config);
        type_str(&mut app, "oops");
        assert!(app.signup.form.errors().is_empty());
        ctrl(&mut app, 's');
        assert!(app.signup.form.errors().has_error(SignupField::Email));
    }
}

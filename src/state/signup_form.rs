//! The demo's signup form: fields, validators and focus handling

use formstate::{
    BlurContext, FieldKey, FieldSet, FieldValue, FormController, FormOptions, InputEvent,
    InputKind, Validation,
};

/// Fields of the signup form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Email,
    Age,
    Newsletter,
}

impl FieldKey for SignupField {
    const ALL: &'static [Self] = &[
        SignupField::Email,
        SignupField::Age,
        SignupField::Newsletter,
    ];

    fn name(self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::Age => "age",
            SignupField::Newsletter => "newsletter",
        }
    }
}

impl SignupField {
    pub fn label(self) -> &'static str {
        match self {
            SignupField::Email => "Email",
            SignupField::Age => "Age",
            SignupField::Newsletter => "Subscribe to newsletter",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            SignupField::Email => InputKind::Text,
            SignupField::Age => InputKind::Number,
            SignupField::Newsletter => InputKind::Checkbox,
        }
    }
}

pub const EMAIL_MESSAGE: &str = "Enter a valid email address";
pub const AGE_MESSAGE: &str = "Age must be a number between 13 and 120";

fn initial_fields() -> FieldSet<SignupField> {
    FieldSet::from_iter([
        (SignupField::Email, FieldValue::from("")),
        (SignupField::Age, FieldValue::from("")),
        (SignupField::Newsletter, FieldValue::from(false)),
    ])
}

fn validate_email(value: &FieldValue, _: &FieldSet<SignupField>) -> Validation {
    let email = value.as_text().trim();
    let valid = match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && domain.contains('.') && !domain.ends_with('.')
        }
        None => false,
    };
    Validation::new(valid, EMAIL_MESSAGE)
}

fn validate_age(value: &FieldValue, _: &FieldSet<SignupField>) -> Validation {
    let valid = value
        .as_number()
        .is_some_and(|age| age.fract() == 0.0 && (13.0..=120.0).contains(&age));
    Validation::new(valid, AGE_MESSAGE)
}

fn normalize_email(_: &InputEvent, ctx: &mut BlurContext<SignupField>) {
    let email = ctx.state()[SignupField::Email].as_text();
    let normalized = email.trim().to_lowercase();
    if normalized != email {
        ctx.set_state([(SignupField::Email, normalized)]);
    }
}

fn normalize_age(_: &InputEvent, ctx: &mut BlurContext<SignupField>) {
    let age = ctx.state()[SignupField::Age].as_text();
    let trimmed = age.trim().trim_start_matches('0');
    if !trimmed.is_empty() && trimmed != age {
        let trimmed = trimmed.to_string();
        ctx.set_state([(SignupField::Age, trimmed)]);
    }
}

/// Validators and blur hooks of the signup form
pub fn signup_options() -> FormOptions<SignupField> {
    FormOptions::new()
        .validate(SignupField::Email, validate_email)
        .validate(SignupField::Age, validate_age)
        .on_blur(SignupField::Email, normalize_email)
        .on_blur(SignupField::Age, normalize_age)
}

/// Signup form plus the focus cursor the UI moves around
pub struct SignupForm {
    pub form: FormController<SignupField>,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new(options: FormOptions<SignupField>) -> Self {
        Self {
            form: FormController::new(initial_fields(), options),
            active_field_index: 0,
        }
    }

    pub fn active_field(&self) -> SignupField {
        SignupField::ALL[self.active_field_index]
    }

    /// Move focus forward, blurring the field being left
    pub fn next_field(&mut self) -> formstate::form::Result<()> {
        self.blur_active()?;
        self.active_field_index = (self.active_field_index + 1) % SignupField::ALL.len();
        Ok(())
    }

    /// Move focus backward, blurring the field being left
    pub fn prev_field(&mut self) -> formstate::form::Result<()> {
        self.blur_active()?;
        if self.active_field_index == 0 {
            self.active_field_index = SignupField::ALL.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
        Ok(())
    }

    /// Type a character into the focused field; Space toggles a checkbox
    pub fn input_char(&mut self, c: char) -> formstate::form::Result<()> {
        let field = self.active_field();
        if field.kind() == InputKind::Checkbox {
            if c == ' ' {
                return self.toggle_active();
            }
            return Ok(());
        }
        let mut text = self.form.value(field).as_text().to_string();
        text.push(c);
        self.form
            .on_change(&InputEvent::new(field.name(), field.kind(), text))
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) -> formstate::form::Result<()> {
        let field = self.active_field();
        if field.kind() == InputKind::Checkbox {
            return Ok(());
        }
        let mut text = self.form.value(field).as_text().to_string();
        if text.pop().is_none() {
            return Ok(());
        }
        self.form
            .on_change(&InputEvent::new(field.name(), field.kind(), text))
    }

    fn toggle_active(&mut self) -> formstate::form::Result<()> {
        let field = self.active_field();
        let checked = !self.form.value(field).as_bool();
        self.form
            .on_change(&InputEvent::checkbox(field.name(), checked))
    }

    fn blur_active(&mut self) -> formstate::form::Result<()> {
        let field = self.active_field();
        let event = self.current_event(field);
        self.form.on_blur(&event).map(|_| ())
    }

    fn current_event(&self, field: SignupField) -> InputEvent {
        let value = self.form.value(field);
        match field.kind() {
            InputKind::Checkbox => InputEvent::checkbox(field.name(), value.as_bool()),
            kind => InputEvent::new(field.name(), kind, value.as_text()),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(signup_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formstate::FieldMessage;

    fn type_str(signup: &mut SignupForm, s: &str) {
        for c in s.chars() {
            signup.input_char(c).unwrap();
        }
    }

    #[test]
    fn test_email_validator() {
        let fields = initial_fields();
        for ok in ["a@b.co", " user@example.com "] {
            assert!(validate_email(&FieldValue::from(ok), &fields).is_valid, "{ok}");
        }
        for bad in ["", "@b.co", "a@b", "a@b.", "plain"] {
            assert!(!validate_email(&FieldValue::from(bad), &fields).is_valid, "{bad}");
        }
    }

    #[test]
    fn test_age_validator() {
        let fields = initial_fields();
        assert!(validate_age(&FieldValue::from("13"), &fields).is_valid);
        assert!(validate_age(&FieldValue::from("120"), &fields).is_valid);
        assert!(!validate_age(&FieldValue::from("12"), &fields).is_valid);
        assert!(!validate_age(&FieldValue::from("30.5"), &fields).is_valid);
        assert!(!validate_age(&FieldValue::from("old"), &fields).is_valid);
    }

    #[test]
    fn test_typing_updates_focused_field() {
        let mut signup = SignupForm::default();
        type_str(&mut signup, "ab");
        signup.backspace().unwrap();
        assert_eq!(signup.form.value(SignupField::Email), &FieldValue::from("a"));
        assert_eq!(signup.form.value(SignupField::Age), &FieldValue::from(""));
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let mut signup = SignupForm::default();
        signup.backspace().unwrap();
        assert!(!signup.form.is_dirty());
    }

    #[test]
    fn test_typing_invalid_email_shows_sticky_error() {
        let mut signup = SignupForm::default();
        type_str(&mut signup, "me");
        assert_eq!(
            signup.form.error(SignupField::Email),
            Some(&FieldMessage::new(EMAIL_MESSAGE, true))
        );
        type_str(&mut signup, "@x.io");
        assert_eq!(
            signup.form.error(SignupField::Email),
            Some(&FieldMessage::new(EMAIL_MESSAGE, false))
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut signup = SignupForm::default();
        signup.prev_field().unwrap();
        assert_eq!(signup.active_field(), SignupField::Newsletter);
        signup.next_field().unwrap();
        assert_eq!(signup.active_field(), SignupField::Email);
    }

    #[test]
    fn test_leaving_email_normalizes_it() {
        let mut signup = SignupForm::default();
        type_str(&mut signup, " Me@X.io ");
        signup.next_field().unwrap();
        assert_eq!(
            signup.form.value(SignupField::Email),
            &FieldValue::from("me@x.io")
        );
        assert_eq!(signup.active_field(), SignupField::Age);
    }

    #[test]
    fn test_leaving_age_strips_leading_zeros() {
        let mut signup = SignupForm::default();
        signup.next_field().unwrap();
        type_str(&mut signup, "042");
        signup.next_field().unwrap();
        assert_eq!(signup.form.value(SignupField::Age), &FieldValue::from("42"));
    }

    #[test]
    fn test_space_toggles_newsletter() {
        let mut signup = SignupForm::default();
        signup.active_field_index = 2;
        signup.input_char(' ').unwrap();
        assert_eq!(
            signup.form.value(SignupField::Newsletter),
            &FieldValue::Bool(true)
        );
        signup.input_char('x').unwrap();
        assert_eq!(
            signup.form.value(SignupField::Newsletter),
            &FieldValue::Bool(true)
        );
    }

    #[test]
    fn test_valid_form_matches() {
        let mut signup = SignupForm::default();
        assert!(!signup.form.all_match());
        type_str(&mut signup, "a@b.co");
        signup.next_field().unwrap();
        type_str(&mut signup, "30");
        assert!(signup.form.all_match());
    }
}

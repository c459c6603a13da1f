//! Raw input events fed to a form controller

use super::value::FieldValue;

/// Kind of input element that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Number,
    TextArea,
    Checkbox,
}

/// The element an event fired on
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputTarget {
    pub name: String,
    pub value: String,
    pub checked: bool,
    pub kind: InputKind,
}

/// A change or blur event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputEvent {
    pub target: InputTarget,
}

impl InputEvent {
    /// Event from a text-like input
    pub fn new(name: &str, kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            target: InputTarget {
                name: name.to_string(),
                value: value.into(),
                checked: false,
                kind,
            },
        }
    }

    /// Event from a plain text input
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::new(name, InputKind::Text, value)
    }

    /// Event from a checkbox
    pub fn checkbox(name: &str, checked: bool) -> Self {
        Self {
            target: InputTarget {
                name: name.to_string(),
                value: String::new(),
                checked,
                kind: InputKind::Checkbox,
            },
        }
    }

    /// The value this event carries: checkboxes report `checked`, everything else its raw text
    pub fn field_value(&self) -> FieldValue {
        match self.target.kind {
            InputKind::Checkbox => FieldValue::Bool(self.target.checked),
            _ => FieldValue::Text(self.target.value.clone()),
        }
    }
}

//! Form field value objects

use serde::{Deserialize, Serialize};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Anything the form carries but never edits directly
    Opaque(serde_json::Value),
}

impl FieldValue {
    /// Whether the value counts as "set" for the automatic validation pass.
    ///
    /// Empty text, `false`, zero, `NaN` and empty/null JSON are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Empty => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Opaque(v) => match v {
                serde_json::Value::Null => false,
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
                serde_json::Value::String(s) => !s.is_empty(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
            },
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the boolean value (returns false for non-boolean fields)
    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// Get the numeric value, parsing text when it holds a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Opaque(v) => v.as_f64(),
            FieldValue::Empty | FieldValue::Bool(_) => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Bool(true) => "[x]".to_string(),
            FieldValue::Bool(false) => "[ ]".to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Opaque(v) => v.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Opaque(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Empty, Into::into)
    }
}

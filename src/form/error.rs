//! Controller errors

use thiserror::Error;

/// Misuse of a form controller.
///
/// Validation failures are not errors; they live in the controller's error set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// An event or patch named a field the form does not track
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;

//! formstate - form state for terminal UIs
//!
//! Tracks field values, per-field validation messages and blur hooks, and
//! keeps an "all valid" flag in step with the inputs.

pub mod config;
pub mod form;

pub use form::{
    BlurContext, BlurHandler, Errors, FieldKey, FieldMessage, FieldSet, FieldValue, FormController,
    FormError, FormOptions, InputEvent, InputKind, InputTarget, Validation, Validator,
};

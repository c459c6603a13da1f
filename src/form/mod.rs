//! Form domain layer
//!
//! A [`FormController`] tracks one form's field values, the messages its
//! validators produce and the hooks that run when a field loses focus.

mod blur;
mod controller;
mod error;
mod event;
mod fields;
mod key;
mod options;
mod validation;
mod value;

pub use blur::{BlurContext, BlurHandler};
pub use controller::FormController;
pub use error::{FormError, Result};
pub use event::{InputEvent, InputKind, InputTarget};
pub use fields::{Errors, FieldMessage, FieldSet};
pub use key::FieldKey;
pub use options::FormOptions;
pub use validation::{Validation, Validator};
pub use value::FieldValue;

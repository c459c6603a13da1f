//! Application state definitions

mod signup_form;

pub use signup_form::{signup_options, SignupField, SignupForm};

//! Form configuration

use super::blur::{BlurContext, BlurHandler};
use super::event::InputEvent;
use super::fields::FieldSet;
use super::key::FieldKey;
use super::validation::{Validation, Validator};
use super::value::FieldValue;
use std::collections::BTreeMap;

/// How a form validates and which hooks it runs.
///
/// ```
/// # use formstate::{FieldKey, FormOptions, Validation};
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// # enum F { Email }
/// # impl FieldKey for F {
/// #     const ALL: &'static [Self] = &[F::Email];
/// #     fn name(self) -> &'static str { "email" }
/// # }
/// let options = FormOptions::new()
///     .validate(F::Email, |value, _| {
///         Validation::new(value.as_text().contains('@'), "bad email")
///     })
///     .on_blur(F::Email, |_event, ctx| {
///         let trimmed = ctx.state()[F::Email].as_text().trim().to_string();
///         ctx.set_state([(F::Email, trimmed)]);
///     });
/// assert!(options.updates_on_change());
/// ```
pub struct FormOptions<K: FieldKey> {
    pub(crate) update_on_change: bool,
    pub(crate) validate_falsy: bool,
    pub(crate) validations: BTreeMap<K, Validator<K>>,
    pub(crate) blurs: BTreeMap<K, Box<dyn BlurHandler<K>>>,
}

impl<K: FieldKey> FormOptions<K> {
    pub fn new() -> Self {
        Self {
            update_on_change: true,
            validate_falsy: false,
            validations: BTreeMap::new(),
            blurs: BTreeMap::new(),
        }
    }

    /// Re-run validators after every field change (default `true`)
    pub fn update_on_change(mut self, enabled: bool) -> Self {
        self.update_on_change = enabled;
        self
    }

    /// Also validate empty, zero and `false` values on change (default `false`)
    pub fn validate_falsy(mut self, enabled: bool) -> Self {
        self.validate_falsy = enabled;
        self
    }

    /// Register the validator for `key`, replacing any previous one
    pub fn validate<F>(mut self, key: K, validator: F) -> Self
    where
        F: Fn(&FieldValue, &FieldSet<K>) -> Validation + 'static,
    {
        self.validations.insert(key, Box::new(validator));
        self
    }

    /// Register a closure to run when `key` loses focus
    pub fn on_blur<F>(self, key: K, handler: F) -> Self
    where
        F: FnMut(&InputEvent, &mut BlurContext<K>) + 'static,
    {
        self.with_blur_handler(key, handler)
    }

    /// Register any [`BlurHandler`] for `key`
    pub fn with_blur_handler(mut self, key: K, handler: impl BlurHandler<K> + 'static) -> Self {
        self.blurs.insert(key, Box::new(handler));
        self
    }

    pub fn updates_on_change(&self) -> bool {
        self.update_on_change
    }

    pub fn validates_falsy(&self) -> bool {
        self.validate_falsy
    }

    pub fn has_validator(&self, key: K) -> bool {
        self.validations.contains_key(&key)
    }
}

impl<K: FieldKey> Default for FormOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

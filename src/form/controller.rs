//! Form state controller

use super::blur::BlurContext;
use super::error::{FormError, Result};
use super::event::InputEvent;
use super::fields::{Errors, FieldMessage, FieldSet};
use super::key::FieldKey;
use super::options::FormOptions;
use super::value::FieldValue;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Owns one form's values, validation messages and hooks.
///
/// Every mutation runs synchronously. When `update_on_change` is on, each
/// field mutation is followed by a validation pass, so the stores are
/// consistent by the time the next frame is drawn.
pub struct FormController<K: FieldKey> {
    initial: FieldSet<K>,
    fields: FieldSet<K>,
    errors: Errors<K>,
    options: FormOptions<K>,
    /// Fields that have failed validation at least once
    sticky: BTreeSet<K>,
    /// Messages written by validation passes, kept between passes
    pending: BTreeMap<K, FieldMessage>,
}

impl<K: FieldKey> FormController<K> {
    /// Create a controller whose initial (and reset) values are `fields`.
    pub fn new(fields: FieldSet<K>, options: FormOptions<K>) -> Self {
        let mut controller = Self {
            initial: fields.clone(),
            fields,
            errors: Errors::new(),
            options,
            sticky: BTreeSet::new(),
            pending: BTreeMap::new(),
        };
        controller.fields_changed();
        controller
    }

    pub fn state(&self) -> &FieldSet<K> {
        &self.fields
    }

    pub fn value(&self, key: K) -> &FieldValue {
        self.fields.value(key)
    }

    pub fn initial_state(&self) -> &FieldSet<K> {
        &self.initial
    }

    pub fn errors(&self) -> &Errors<K> {
        &self.errors
    }

    pub fn error(&self, key: K) -> Option<&FieldMessage> {
        self.errors.get(key)
    }

    /// Whether `key` has failed validation since the last reset
    pub fn is_sticky(&self, key: K) -> bool {
        self.sticky.contains(&key)
    }

    /// Whether any field differs from its initial value
    pub fn is_dirty(&self) -> bool {
        self.fields != self.initial
    }

    /// Apply a change event: checkboxes store `checked`, other inputs their text.
    pub fn on_change(&mut self, event: &InputEvent) -> Result<()> {
        let key = Self::resolve(&event.target.name)?;
        let value = event.field_value();
        debug!(field = key.name(), ?value, "field changed");
        self.apply(vec![(key, value)])
    }

    /// Merge values into the field set
    pub fn set_state<I, V>(&mut self, patch: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        V: Into<FieldValue>,
    {
        self.apply(patch.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// Merge messages into the error set; field values are untouched.
    ///
    /// Every key must be a tracked field; otherwise nothing is applied.
    pub fn set_errors(
        &mut self,
        patch: impl IntoIterator<Item = (K, FieldMessage)>,
    ) -> Result<()> {
        let patch: Vec<_> = patch.into_iter().collect();
        self.fields.check_keys(patch.iter().map(|(key, _)| *key))?;
        self.errors.merge(patch);
        Ok(())
    }

    /// Reset to the initial values, overridden by `overrides`.
    ///
    /// Also forgets sticky failures and every error message.
    pub fn clear_state<I, V>(&mut self, overrides: Option<I>) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        V: Into<FieldValue>,
    {
        let mut fields = self.initial.clone();
        if let Some(overrides) = overrides {
            fields.merge(overrides.into_iter().map(|(k, v)| (k, v.into())).collect())?;
        }
        self.reset_to(fields);
        Ok(())
    }

    /// [`clear_state`](Self::clear_state) without overrides
    pub fn reset(&mut self) {
        self.reset_to(self.initial.clone());
    }

    /// Run a validation pass now, regardless of `update_on_change`
    pub fn validate(&mut self) {
        self.run_validations();
    }

    /// Fields with a blur adapter
    pub fn blur_events(&self) -> impl Iterator<Item = K> + '_ {
        self.options.blurs.keys().copied()
    }

    pub fn has_blur(&self, key: K) -> bool {
        self.options.blurs.contains_key(&key)
    }

    /// Run the blur adapter for the event's field.
    ///
    /// The field's validator (if any) checks the blurred value first and
    /// flags a failure in the error set; then the registered handler runs.
    /// Returns `false` when the field has no blur handler.
    pub fn on_blur(&mut self, event: &InputEvent) -> Result<bool> {
        let key = Self::resolve(&event.target.name)?;
        if !self.has_blur(key) {
            return Ok(false);
        }

        let blur_error = self
            .options
            .validations
            .get(&key)
            .map(|validator| validator(&event.field_value(), &self.fields))
            .filter(|verdict| !verdict.is_valid);

        let mut ctx = BlurContext::new(self.fields.clone());
        if let Some(handler) = self.options.blurs.get_mut(&key) {
            handler.on_blur(event, &mut ctx);
        }

        // Nothing is written unless every queued key is tracked
        let (state_patch, error_patch) = ctx.into_patches();
        self.fields.check_keys(
            state_patch
                .iter()
                .map(|(k, _)| *k)
                .chain(error_patch.iter().map(|(k, _)| *k)),
        )?;

        if let Some(verdict) = blur_error {
            debug!(field = key.name(), msg = %verdict.msg, "blur validation failed");
            self.errors.insert(key, FieldMessage::error(verdict.msg));
        }
        // Handler messages merge after the pass its field updates trigger
        if !state_patch.is_empty() {
            self.apply(state_patch)?;
        }
        self.errors.merge(error_patch);
        Ok(true)
    }

    /// True iff every registered validator accepts the current values
    pub fn all_match(&self) -> bool {
        self.options
            .validations
            .iter()
            .all(|(key, validator)| validator(self.fields.value(*key), &self.fields).is_valid)
    }

    pub fn has_errors(&self) -> bool {
        !self.all_match()
    }

    /// Field values as a JSON object keyed by field name
    pub fn snapshot(&self) -> serde_json::Value {
        self.fields.to_json()
    }

    fn resolve(name: &str) -> Result<K> {
        K::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn reset_to(&mut self, fields: FieldSet<K>) {
        debug!("form reset");
        self.fields = fields;
        self.sticky.clear();
        self.pending.clear();
        self.errors.clear();
        self.fields_changed();
    }

    fn apply(&mut self, patch: Vec<(K, FieldValue)>) -> Result<()> {
        self.fields.merge(patch)?;
        self.fields_changed();
        Ok(())
    }

    fn fields_changed(&mut self) {
        if self.options.update_on_change {
            self.run_validations();
        }
    }

    fn run_validations(&mut self) {
        for (key, value) in self.fields.iter() {
            let Some(validator) = self.options.validations.get(&key) else {
                continue;
            };
            if !value.is_truthy() && !self.options.validate_falsy {
                trace!(field = key.name(), "skipping falsy value");
                continue;
            }

            let verdict = validator(value, &self.fields);
            if !verdict.is_valid && self.sticky.insert(key) {
                debug!(field = key.name(), msg = %verdict.msg, "field failed validation");
            }
            if self.sticky.contains(&key) {
                self.pending
                    .insert(key, FieldMessage::new(verdict.msg, !verdict.is_valid));
            }
        }

        if self.pending.is_empty() {
            self.errors.clear();
        } else {
            self.errors
                .merge(self.pending.iter().map(|(k, m)| (*k, m.clone())));
        }
    }
}

//! Keyed value and message stores

use super::error::{FormError, Result};
use super::key::FieldKey;
use super::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

static EMPTY: FieldValue = FieldValue::Empty;

/// Current values of every tracked input
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet<K: FieldKey> {
    values: BTreeMap<K, FieldValue>,
}

impl<K: FieldKey> FieldSet<K> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: K) -> Option<&FieldValue> {
        self.values.get(&key)
    }

    /// Value of `key`, or [`FieldValue::Empty`] if the set does not track it
    pub fn value(&self, key: K) -> &FieldValue {
        self.values.get(&key).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, key: K) -> bool {
        self.values.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &FieldValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge `patch` over the current values.
    ///
    /// Every key must already be tracked; otherwise nothing is applied.
    pub(crate) fn merge(&mut self, patch: Vec<(K, FieldValue)>) -> Result<()> {
        self.check_keys(patch.iter().map(|(key, _)| *key))?;
        self.values.extend(patch);
        Ok(())
    }

    /// Fail on the first key the set does not track
    pub(crate) fn check_keys(&self, mut keys: impl Iterator<Item = K>) -> Result<()> {
        match keys.find(|key| !self.contains(*key)) {
            Some(key) => Err(FormError::UnknownField(key.name().to_string())),
            None => Ok(()),
        }
    }

    /// The set as a JSON object keyed by field name
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .map(|(key, value)| {
                let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
                (key.name().to_string(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<K: FieldKey> Default for FieldSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FieldKey, V: Into<FieldValue>> FromIterator<(K, V)> for FieldSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl<K: FieldKey> Index<K> for FieldSet<K> {
    type Output = FieldValue;

    fn index(&self, key: K) -> &FieldValue {
        self.value(key)
    }
}

/// Message shown under a field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMessage {
    pub message: String,
    pub has_error: bool,
}

impl FieldMessage {
    pub fn new(message: impl Into<String>, has_error: bool) -> Self {
        Self {
            message: message.into(),
            has_error,
        }
    }

    /// A message flagged as an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }
}

/// Messages per field, merged rather than replaced on update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors<K: FieldKey> {
    entries: BTreeMap<K, FieldMessage>,
}

impl<K: FieldKey> Errors<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: K) -> Option<&FieldMessage> {
        self.entries.get(&key)
    }

    /// Whether `key` currently displays an error
    pub fn has_error(&self, key: K) -> bool {
        self.entries.get(&key).is_some_and(|m| m.has_error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &FieldMessage)> {
        self.entries.iter().map(|(k, m)| (*k, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn merge(&mut self, patch: impl IntoIterator<Item = (K, FieldMessage)>) {
        self.entries.extend(patch);
    }

    pub(crate) fn insert(&mut self, key: K, message: FieldMessage) {
        self.entries.insert(key, message);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: FieldKey> Default for Errors<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FieldKey> FromIterator<(K, FieldMessage)> for Errors<K> {
    fn from_iter<I: IntoIterator<Item = (K, FieldMessage)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::key::test_keys::Field;
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> FieldSet<Field> {
        FieldSet::from_iter([
            (Field::Email, FieldValue::from("")),
            (Field::Age, FieldValue::from(0u32)),
        ])
    }

    #[test]
    fn test_untracked_key_reads_as_empty() {
        let fields = sample();
        assert_eq!(fields.get(Field::Terms), None);
        assert_eq!(fields[Field::Terms], FieldValue::Empty);
    }

    #[test]
    fn test_merge_updates_only_named_keys() {
        let mut fields = sample();
        fields
            .merge(vec![(Field::Email, FieldValue::from("a@b.com"))])
            .unwrap();
        assert_eq!(fields[Field::Email], FieldValue::from("a@b.com"));
        assert_eq!(fields[Field::Age], FieldValue::from(0u32));
    }

    #[test]
    fn test_merge_rejects_untracked_key_atomically() {
        let mut fields = sample();
        let result = fields.merge(vec![
            (Field::Email, FieldValue::from("x")),
            (Field::Terms, FieldValue::from(true)),
        ]);
        assert_eq!(result, Err(FormError::UnknownField("terms".to_string())));
        assert_eq!(fields, sample());
    }

    #[test]
    fn test_to_json_uses_field_names() {
        assert_eq!(sample().to_json(), json!({"email": "", "age": 0.0}));
    }

    #[test]
    fn test_errors_merge_keeps_other_entries() {
        let mut errors = Errors::from_iter([(Field::Age, FieldMessage::error("too young"))]);
        errors.merge([(Field::Email, FieldMessage::new("bad email", false))]);
        assert_eq!(errors.len(), 2);
        assert!(errors.has_error(Field::Age));
        assert!(!errors.has_error(Field::Email));
        assert!(!errors.has_error(Field::Terms));
    }

    #[test]
    fn test_field_message_serializes_camel_case() {
        let json = serde_json::to_value(FieldMessage::error("m")).unwrap();
        assert_eq!(json, json!({"message": "m", "hasError": true}));
    }
}

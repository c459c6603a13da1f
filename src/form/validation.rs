//! Per-field validators

use super::fields::FieldSet;
use super::value::FieldValue;

/// Verdict a validator returns for one field.
///
/// `msg` is kept even when the value is valid; sticky fields keep showing it
/// with the error flag cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub msg: String,
}

impl Validation {
    pub fn new(is_valid: bool, msg: impl Into<String>) -> Self {
        Self {
            is_valid,
            msg: msg.into(),
        }
    }
}

/// Pure check of one field against the whole form
pub type Validator<K> = Box<dyn Fn(&FieldValue, &FieldSet<K>) -> Validation>;

#[cfg(test)]
mod tests {
    use super::super::key::test_keys::Field;
    use super::*;

    #[test]
    fn test_validator_sees_whole_form() {
        let adult_with_terms: Validator<Field> = Box::new(|value, fields| {
            let adult = value.as_number().is_some_and(|age| age >= 18.0);
            Validation::new(adult || !fields[Field::Terms].as_bool(), "must be 18")
        });

        let fields = FieldSet::from_iter([
            (Field::Age, FieldValue::from(16u32)),
            (Field::Terms, FieldValue::from(true)),
        ]);
        let verdict = adult_with_terms(&fields[Field::Age], &fields);
        assert_eq!(verdict, Validation::new(false, "must be 18"));
    }
}

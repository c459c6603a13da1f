//! Field name enumeration

use std::fmt::Debug;

/// A closed set of field names, fixed when a form is defined.
///
/// Implement it on a fieldless enum:
///
/// ```
/// use formstate::FieldKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// enum Login {
///     User,
///     Password,
/// }
///
/// impl FieldKey for Login {
///     const ALL: &'static [Self] = &[Login::User, Login::Password];
///
///     fn name(self) -> &'static str {
///         match self {
///             Login::User => "user",
///             Login::Password => "password",
///         }
///     }
/// }
///
/// assert_eq!(Login::from_name("password"), Some(Login::Password));
/// ```
pub trait FieldKey: Copy + Ord + Debug + 'static {
    /// Every key, in display order
    const ALL: &'static [Self];

    /// The name input events use for this field
    fn name(self) -> &'static str;

    /// Look a key up by its event name
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use super::FieldKey;

    /// Keys shared by the form module tests
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Field {
        Email,
        Age,
        Terms,
    }

    impl FieldKey for Field {
        const ALL: &'static [Self] = &[Field::Email, Field::Age, Field::Terms];

        fn name(self) -> &'static str {
            match self {
                Field::Email => "email",
                Field::Age => "age",
                Field::Terms => "terms",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::Field;
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_key() {
        for key in Field::ALL {
            assert_eq!(Field::from_name(key.name()), Some(*key));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Field::from_name("nickname"), None);
        assert_eq!(Field::from_name("Email"), None);
    }
}

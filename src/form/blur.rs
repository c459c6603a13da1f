//! Blur handlers and the context they run with

use super::event::InputEvent;
use super::fields::{FieldMessage, FieldSet};
use super::key::FieldKey;
use super::value::FieldValue;

/// What a blur handler can see and change.
///
/// `state()` is the field set as it was when the blur fired. Updates queued
/// with `set_state`/`set_errors` are applied once the handler returns.
#[derive(Debug)]
pub struct BlurContext<K: FieldKey> {
    state: FieldSet<K>,
    state_patch: Vec<(K, FieldValue)>,
    error_patch: Vec<(K, FieldMessage)>,
}

impl<K: FieldKey> BlurContext<K> {
    pub(crate) fn new(state: FieldSet<K>) -> Self {
        Self {
            state,
            state_patch: Vec::new(),
            error_patch: Vec::new(),
        }
    }

    pub fn state(&self) -> &FieldSet<K> {
        &self.state
    }

    /// Queue field updates
    pub fn set_state<I, V>(&mut self, patch: I)
    where
        I: IntoIterator<Item = (K, V)>,
        V: Into<FieldValue>,
    {
        self.state_patch
            .extend(patch.into_iter().map(|(k, v)| (k, v.into())));
    }

    /// Queue error entries
    pub fn set_errors(&mut self, patch: impl IntoIterator<Item = (K, FieldMessage)>) {
        self.error_patch.extend(patch);
    }

    pub(crate) fn into_patches(self) -> (Vec<(K, FieldValue)>, Vec<(K, FieldMessage)>) {
        (self.state_patch, self.error_patch)
    }
}

/// Callback run when a field loses focus, after its validator
#[cfg_attr(test, mockall::automock)]
pub trait BlurHandler<K: FieldKey> {
    fn on_blur(&mut self, event: &InputEvent, ctx: &mut BlurContext<K>);
}

impl<K, F> BlurHandler<K> for F
where
    K: FieldKey,
    F: FnMut(&InputEvent, &mut BlurContext<K>),
{
    fn on_blur(&mut self, event: &InputEvent, ctx: &mut BlurContext<K>) {
        self(event, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::super::key::test_keys::Field;
    use super::*;

    #[test]
    fn test_context_queues_patches_in_order() {
        let state = FieldSet::from_iter([(Field::Email, "a")]);
        let mut ctx = BlurContext::new(state.clone());
        ctx.set_state([(Field::Email, "b")]);
        ctx.set_state([(Field::Email, "c")]);
        ctx.set_errors([(Field::Email, FieldMessage::error("taken"))]);

        assert_eq!(ctx.state(), &state);
        let (fields, errors) = ctx.into_patches();
        assert_eq!(
            fields,
            vec![
                (Field::Email, FieldValue::from("b")),
                (Field::Email, FieldValue::from("c")),
            ]
        );
        assert_eq!(errors, vec![(Field::Email, FieldMessage::error("taken"))]);
    }

    #[test]
    fn test_closures_are_handlers() {
        let mut seen = Vec::new();
        let mut handler = |event: &InputEvent, _ctx: &mut BlurContext<Field>| {
            seen.push(event.target.value.clone());
        };
        let mut ctx = BlurContext::new(FieldSet::new());
        BlurHandler::on_blur(&mut handler, &InputEvent::text("email", "x"), &mut ctx);
        assert_eq!(seen, vec!["x".to_string()]);
    }
}

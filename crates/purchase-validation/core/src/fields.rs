//! Read access to the current values of form fields

use std::collections::{BTreeMap, HashMap};

/// Anything that can report the current value of a named field.
///
/// Returns `None` when the field does not exist at all; an existing but
/// empty input is `Some(String::new())`.
pub trait FieldSource {
    fn field_value(&self, id: &str) -> Option<String>;

    /// Current value, treating a missing field as empty
    fn value_or_empty(&self, id: &str) -> String {
        match self.field_value(id) {
            Some(value) => value,
            None => {
                tracing::warn!("Form field '{}' not found, treating as empty", id);
                String::new()
            }
        }
    }
}

impl FieldSource for HashMap<String, String> {
    fn field_value(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field_value(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_value(&self, id: &str) -> Option<String> {
        (**self).field_value(id)
    }
}

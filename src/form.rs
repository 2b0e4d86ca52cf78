//! Forms: an ordered collection of named fields plus submission state

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ErrorBag, FieldErrors};
use crate::field::{Field, FieldInit};
use crate::remote::RemoteError;

/// A form under validation: named fields in declaration order, the
/// usual submission flags, and an immutable base-state snapshot taken
/// once at construction for [`Form::reset`].
#[derive(Debug, Clone)]
pub struct Form {
    fields: IndexMap<String, Field>,
    pub loading: bool,
    pub success: bool,
    /// Transport-layer error attached by the host after a failed
    /// submission; rendered through [`Form::error_message`].
    pub error: Option<RemoteError>,
    base_state: Option<Box<Form>>,
}

impl Form {
    /// Build a form from field initializers and capture the base-state
    /// snapshot.
    pub fn new<I, T>(inits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FieldInit>,
    {
        let mut fields = IndexMap::new();
        for init in inits {
            let (name, field) = init.into().into_field();
            fields.insert(name, field);
        }
        Self::from_fields(fields)
    }

    /// Form with no fields.
    pub fn empty() -> Self {
        Self::from_fields(IndexMap::new())
    }

    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    fn from_fields(fields: IndexMap<String, Field>) -> Self {
        let mut form = Self {
            fields,
            loading: false,
            success: false,
            error: None,
            base_state: None,
        };
        form.base_state = Some(Box::new(form.clone()));
        form
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Insert or replace a field after construction. The base-state
    /// snapshot is not retaken.
    pub fn insert(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(|field| &field.value)
    }

    /// Set a field's value. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) {
        if let Some(field) = self.fields.get_mut(name) {
            field.set_value(value);
        }
    }

    /// Snapshot of every field's current value, in declaration order.
    pub fn values(&self) -> IndexMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// First error message recorded for a field, in rule declaration
    /// order. `None` when the field is clean or unknown.
    pub fn first_error(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|field| field.errors.first())
    }

    pub fn set_loading(&mut self, state: bool) {
        self.loading = state;
    }

    /// Write server-side per-field error bags into matching fields.
    /// Unknown field names are ignored.
    pub fn apply_remote_errors(&mut self, errors: &IndexMap<String, ErrorBag>) {
        for (name, bag) in errors {
            if let Some(field) = self.fields.get_mut(name) {
                field.errors = FieldErrors::from_bag(bag.clone());
            }
        }
    }

    /// Human-readable message for the attached transport error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(RemoteError::user_message)
    }

    /// Restore fields and flags from the base-state snapshot taken at
    /// construction. The snapshot itself is kept for further resets.
    pub fn reset(&mut self) {
        if let Some(base) = self.base_state.clone() {
            let snapshot = self.base_state.take();
            *self = *base;
            self.base_state = snapshot;
        }
    }
}

/// Builder for assembling a form field by field.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: IndexMap<String, Field>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Field with an empty string value.
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<crate::field::RuleSpec>) -> Self {
        self.fields.insert(name.into(), Field::new(rules));
        self
    }

    /// Field with an initial value.
    pub fn field_with_value(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        rules: impl Into<crate::field::RuleSpec>,
    ) -> Self {
        self.fields
            .insert(name.into(), Field::new(rules).with_value(value));
        self
    }

    /// Field from an explicit initializer.
    pub fn init(mut self, init: impl Into<FieldInit>) -> Self {
        let (name, field) = init.into().into_field();
        self.fields.insert(name, field);
        self
    }

    /// Capture the base-state snapshot and finish the form.
    pub fn build(self) -> Form {
        Form::from_fields(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;
    use serde_json::json;

    #[test]
    fn test_fields_keep_declaration_order() {
        let form = Form::new(["name", "email", "age"]);
        assert_eq!(form.field_names(), vec!["name", "email", "age"]);
    }

    #[test]
    fn test_values_snapshot() {
        let form = Form::builder()
            .field_with_value("name", json!("Grace"), "required")
            .field_with_value("age", json!(85), "required|number")
            .build();

        let values = form.values();
        assert_eq!(values.get("name"), Some(&json!("Grace")));
        assert_eq!(values.get("age"), Some(&json!(85)));
    }

    #[test]
    fn test_reset_restores_base_state() {
        let mut form = Form::builder()
            .field_with_value("name", json!(""), "required")
            .build();

        form.set_value("name", json!("scribbled"));
        form.loading = true;
        form.success = true;
        if let Some(field) = form.field_mut("name") {
            let mut bag = ErrorBag::new();
            bag.insert("required", "This field is required");
            field.errors = FieldErrors::from_bag(bag);
        }

        form.reset();

        assert_eq!(form.value("name"), Some(&json!("")));
        assert!(!form.loading);
        assert!(!form.success);
        assert!(form.field("name").unwrap().errors.is_clean());
    }

    #[test]
    fn test_reset_is_repeatable() {
        let mut form = Form::builder()
            .field_with_value("name", json!("initial"), "required")
            .build();

        form.set_value("name", json!("first change"));
        form.reset();
        form.set_value("name", json!("second change"));
        form.reset();

        assert_eq!(form.value("name"), Some(&json!("initial")));
    }

    #[test]
    fn test_base_state_ignores_later_mutation() {
        let mut form = Form::builder()
            .field_with_value("name", json!("original"), "required")
            .build();

        // Mutations after construction never leak into the snapshot
        form.set_value("name", json!("changed"));
        form.insert("extra", Field::new("required"));
        form.reset();

        assert_eq!(form.value("name"), Some(&json!("original")));
        assert!(form.field("extra").is_none());
    }

    #[test]
    fn test_apply_remote_errors_matches_fields() {
        let mut form = Form::new(["email", "name"]);

        let mut remote = IndexMap::new();
        let mut bag = ErrorBag::new();
        bag.insert("unique", "The email has already been taken.");
        remote.insert("email".to_string(), bag);
        let mut stray = ErrorBag::new();
        stray.insert("unique", "irrelevant");
        remote.insert("missing_field".to_string(), stray);

        form.apply_remote_errors(&remote);

        assert_eq!(
            form.first_error("email"),
            Some("The email has already been taken.")
        );
        assert!(form.field("name").unwrap().errors.is_clean());
    }

    #[test]
    fn test_builder_with_descriptor() {
        let form = Form::builder()
            .init("plain")
            .init(FieldDescriptor::new("age").value(json!(30)).rules("number"))
            .build();

        assert_eq!(form.len(), 2);
        assert_eq!(form.value("age"), Some(&json!(30)));
        assert_eq!(form.value("plain"), Some(&json!("")));
    }
}

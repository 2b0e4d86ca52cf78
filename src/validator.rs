//! Field and form validation engine

use tracing::{debug, warn};

use crate::error::{ErrorBag, FieldErrors, ValidateError};
use crate::field::{Field, RuleSpec};
use crate::form::Form;
use crate::parser;
use crate::registry::Registry;
use crate::rule::{FileInput, RuleArgs};
use crate::value;

/// Host-supplied lookup from field name to file-input handle, consumed
/// by `file` rules during a form-wide pass.
pub trait ElementLookup {
    fn element(&self, field: &str) -> Option<&dyn FileInput>;
}

/// Lookup that resolves nothing; the default for forms without file
/// inputs.
pub struct NoElements;

impl ElementLookup for NoElements {
    fn element(&self, _field: &str) -> Option<&dyn FileInput> {
        None
    }
}

/// The validation engine: resolves each field's parsed rule list
/// against its registry and writes error bags back onto the form.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Registry,
}

impl Validator {
    /// Validator over the built-in rule set.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Validator over a caller-assembled registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Evaluate one field's rules without touching the form. Rule
    /// failures land in the returned [`FieldErrors`]; only a missing
    /// rule spec is an `Err`.
    pub fn check_field(
        &self,
        name: &str,
        field: &Field,
        form: &Form,
        element: Option<&dyn FileInput>,
    ) -> Result<FieldErrors, ValidateError> {
        let spec = field.rules.as_ref().ok_or_else(|| ValidateError::MissingRules {
            field: name.to_string(),
        })?;

        match spec {
            RuleSpec::Predicate(test) => match test(&field.value) {
                Ok(()) => Ok(FieldErrors::Clean),
                Err(message) => {
                    let mut bag = ErrorBag::new();
                    bag.insert("predicate", message);
                    Ok(FieldErrors::Invalid(bag))
                }
            },
            RuleSpec::Literal(raw) => {
                let parsed = parser::parse(raw);
                let nullable = parser::has_nullable(&parsed);
                let mut bag = ErrorBag::new();

                for rule in &parsed {
                    // Checked on every iteration: with `nullable` in the
                    // spec, an empty value skips all remaining rules.
                    if nullable && value::is_falsy(&field.value) {
                        break;
                    }

                    let Some(resolved) = self.registry.resolve(&rule.name) else {
                        warn!(rule = %rule.name, field = %name, "unknown validation rule, skipping");
                        continue;
                    };

                    let args = RuleArgs {
                        field: name,
                        value: &field.value,
                        params: &rule.params,
                        form,
                        element,
                    };

                    if !resolved.passes(&args) {
                        if let Some(message) = resolved.render(&args) {
                            bag.insert(rule.name.clone(), message);
                        }
                    }
                }

                Ok(FieldErrors::from_bag(bag))
            }
        }
    }

    /// Validate one field and write the outcome onto it. Returns whether
    /// the field passed.
    pub fn validate_field(
        &self,
        form: &mut Form,
        name: &str,
        element: Option<&dyn FileInput>,
    ) -> Result<bool, ValidateError> {
        let field = form.field(name).ok_or_else(|| ValidateError::UnknownField {
            field: name.to_string(),
        })?;

        let outcome = self.check_field(name, field, form, element)?;
        let valid = outcome.is_clean();
        debug!(field = %name, valid, "validated field");

        if let Some(slot) = form.field_mut(name) {
            slot.errors = outcome;
        }
        Ok(valid)
    }

    /// Validate every field in declaration order, overwriting each
    /// field's errors. Returns true iff every field passed; one field's
    /// failure never stops the others.
    pub fn validate_form(&self, form: &mut Form) -> Result<bool, ValidateError> {
        self.validate_form_with(form, &NoElements)
    }

    /// [`Validator::validate_form`] with file-input handles resolved
    /// through the given lookup.
    pub fn validate_form_with(
        &self,
        form: &mut Form,
        elements: &dyn ElementLookup,
    ) -> Result<bool, ValidateError> {
        let names = form.field_names();
        let mut passed = 0usize;

        for name in &names {
            if self.validate_field(form, name, elements.element(name))? {
                passed += 1;
            }
        }

        debug!(total = names.len(), passed, "validated form");
        Ok(passed == names.len())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

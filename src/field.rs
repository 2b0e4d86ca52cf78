//! Fields and their rule specifications

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::FieldErrors;

/// Outcome of a predicate-mode rule spec: `Ok` passes, `Err` carries
/// the single message recorded against the field.
pub type PredicateResult = Result<(), String>;

type PredicateFn = Arc<dyn Fn(&Value) -> PredicateResult + Send + Sync>;

/// A field's validation specification: either a literal mini-language
/// string parsed against the registry, or a bare predicate that bypasses
/// parsing entirely.
#[derive(Clone)]
pub enum RuleSpec {
    /// `"required|min:3|same:password"` form.
    Literal(String),
    /// Functional rule mode: one predicate over the value.
    Predicate(PredicateFn),
}

impl RuleSpec {
    pub fn literal(spec: impl Into<String>) -> Self {
        Self::Literal(spec.into())
    }

    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> PredicateResult + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(test))
    }
}

impl From<&str> for RuleSpec {
    fn from(spec: &str) -> Self {
        Self::literal(spec)
    }
}

impl From<String> for RuleSpec {
    fn from(spec: String) -> Self {
        Self::Literal(spec)
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(spec) => f.debug_tuple("Literal").field(spec).finish(),
            Self::Predicate(_) => f.debug_tuple("Predicate").finish(),
        }
    }
}

/// One named form field: a current value, a rule spec, and the outcome
/// of the last validation pass. The value is mutated by the host; the
/// errors are mutated only by the validator.
#[derive(Debug, Clone)]
pub struct Field {
    pub value: Value,
    /// `None` is constructible for hand-built fields and is a fatal
    /// configuration error at validation time.
    pub rules: Option<RuleSpec>,
    pub errors: FieldErrors,
}

impl Field {
    /// Field with an empty string value and the given rules.
    pub fn new(rules: impl Into<RuleSpec>) -> Self {
        Self {
            value: Value::String(String::new()),
            rules: Some(rules.into()),
            errors: FieldErrors::Clean,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}

/// Form-construction initializer: a bare name (value `""`, rules
/// `required`) or a descriptor overriding any of the defaults.
#[derive(Debug, Clone)]
pub enum FieldInit {
    Name(String),
    Descriptor(FieldDescriptor),
}

/// Explicit field initializer; unset pieces fall back to the bare-name
/// defaults.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub value: Option<Value>,
    pub rules: Option<RuleSpec>,
    pub errors: Option<FieldErrors>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            rules: None,
            errors: None,
        }
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn rules(mut self, rules: impl Into<RuleSpec>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    pub fn errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl FieldInit {
    /// The field's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Descriptor(descriptor) => &descriptor.name,
        }
    }

    /// Materialize the field, applying defaults for unset pieces.
    pub(crate) fn into_field(self) -> (String, Field) {
        match self {
            Self::Name(name) => (name, Field::new("required")),
            Self::Descriptor(descriptor) => {
                let field = Field {
                    value: descriptor.value.unwrap_or_else(|| Value::String(String::new())),
                    rules: Some(
                        descriptor
                            .rules
                            .unwrap_or_else(|| RuleSpec::literal("required")),
                    ),
                    errors: descriptor.errors.unwrap_or_default(),
                };
                (descriptor.name, field)
            }
        }
    }
}

impl From<&str> for FieldInit {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FieldInit {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<FieldDescriptor> for FieldInit {
    fn from(descriptor: FieldDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

//! Validation error types and the per-field error bag

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered collection of failed rules for one field, mapping the failing
/// rule's name to its formatted message. Iteration order is rule
/// declaration order, so the first entry is the message a UI shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBag {
    entries: IndexMap<String, String>,
}

impl ErrorBag {
    /// Create an empty error bag.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Record a failing rule's message. A rule appearing twice in a spec
    /// keeps the last message under its single key.
    pub fn insert(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(rule.into(), message.into());
    }

    /// Get the message recorded for a specific rule.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.entries.get(rule).map(String::as_str)
    }

    /// The first recorded message, in rule declaration order.
    pub fn first(&self) -> Option<&str> {
        self.entries.values().next().map(String::as_str)
    }

    /// Names of the failing rules, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over (rule, message) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (rule, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", rule, message)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(String, String)> for ErrorBag {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Validation outcome attached to a field. `Clean` is the explicit
/// sentinel for "not yet validated, or validated with zero failures";
/// an `Invalid` bag is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrors {
    #[default]
    Clean,
    Invalid(ErrorBag),
}

impl FieldErrors {
    /// Wrap a bag, collapsing an empty one back to `Clean`.
    pub fn from_bag(bag: ErrorBag) -> Self {
        if bag.is_empty() {
            Self::Clean
        } else {
            Self::Invalid(bag)
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }

    /// The underlying bag, when the field failed validation.
    pub fn bag(&self) -> Option<&ErrorBag> {
        match self {
            Self::Clean => None,
            Self::Invalid(bag) => Some(bag),
        }
    }

    /// First failing message in declaration order, if any.
    pub fn first(&self) -> Option<&str> {
        self.bag().and_then(ErrorBag::first)
    }
}

/// Fatal configuration errors. Ordinary rule failures are never errors;
/// they land in the field's [`ErrorBag`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// A field under validation carries no rule spec. Rules are
    /// mandatory; continuing would validate nothing meaningfully.
    #[error("field `{field}` has no validation rules")]
    MissingRules { field: String },

    /// The named field does not exist on the form being validated.
    #[error("form has no field named `{field}`")]
    UnknownField { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_bag_keeps_declaration_order() {
        let mut bag = ErrorBag::new();
        bag.insert("required", "This field is required");
        bag.insert("email", "This email is invalid");
        bag.insert("min", "This field has to contain at least 3 characters");

        let rules: Vec<&str> = bag.rules().collect();
        assert_eq!(rules, vec!["required", "email", "min"]);
        assert_eq!(bag.first(), Some("This field is required"));
    }

    #[test]
    fn test_error_bag_lookup() {
        let mut bag = ErrorBag::new();
        bag.insert("email", "This email is invalid");

        assert_eq!(bag.get("email"), Some("This email is invalid"));
        assert_eq!(bag.get("required"), None);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_field_errors_sentinel() {
        assert!(FieldErrors::Clean.is_clean());
        assert!(FieldErrors::from_bag(ErrorBag::new()).is_clean());

        let mut bag = ErrorBag::new();
        bag.insert("required", "This field is required");
        let errors = FieldErrors::from_bag(bag);
        assert!(!errors.is_clean());
        assert_eq!(errors.first(), Some("This field is required"));
    }

    #[test]
    fn test_validate_error_display() {
        let err = ValidateError::MissingRules {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "field `email` has no validation rules");
    }
}

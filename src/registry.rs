//! Rule registry: named rules resolved at validation time
//!
//! The registry is an explicit value owned by the validator (or the
//! caller), not a process-wide table. Built-ins are inserted first;
//! caller-supplied rules are merged after and overwrite same-named
//! built-ins. There is no removal operation.

use indexmap::IndexMap;

use crate::denylist;
use crate::rule::Rule;
use crate::rules;

/// Mapping from rule name to [`Rule`], append/overwrite-only.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: IndexMap<String, Rule>,
}

impl Registry {
    /// Registry with the built-in rules and the bundled public-email
    /// denylist.
    pub fn new() -> Self {
        Self::with_denylist(denylist::default_denylist())
    }

    /// Registry with the built-in rules, consulting the given domain
    /// denylist for `privateEmail`.
    pub fn with_denylist(domains: Vec<String>) -> Self {
        let mut registry = Self::empty();
        rules::install(&mut registry, domains);
        registry
    }

    /// Registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Register a rule under a name, overwriting any existing rule with
    /// that name.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    /// Merge caller-supplied rules over the current set; last writer
    /// wins on name collisions.
    pub fn merge(&mut self, custom: impl IntoIterator<Item = (String, Rule)>) {
        for (name, rule) in custom {
            self.register(name, rule);
        }
    }

    /// Look up a rule by name.
    pub fn resolve(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Whether a rule is registered under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_installed() {
        let registry = Registry::new();

        for name in [
            "nullable",
            "required",
            "true",
            "false",
            "requiredIf",
            "is",
            "not",
            "email",
            "privateEmail",
            "url",
            "alpha",
            "number",
            "alphaNum",
            "alphaNumPunct",
            "name",
            "phone",
            "min",
            "max",
            "length",
            "inArray",
            "notInArray",
            "file",
            "size",
            "same",
        ] {
            assert!(registry.contains(name), "missing built-in rule `{}`", name);
        }
    }

    #[test]
    fn test_unknown_rule_resolves_to_none() {
        let registry = Registry::new();
        assert!(registry.resolve("requried").is_none());
    }

    #[test]
    fn test_custom_rule_overrides_builtin() {
        let mut registry = Registry::new();
        let before = registry.len();

        registry.merge([(
            "required".to_string(),
            Rule::value(|_| true, |_| "never shown".to_string()),
        )]);

        // Overwrite, not append
        assert_eq!(registry.len(), before);
        assert!(registry.contains("required"));
    }

    #[test]
    fn test_merge_appends_new_rules() {
        let mut registry = Registry::new();
        let before = registry.len();

        registry.merge([(
            "even".to_string(),
            Rule::value(
                |v| v.as_str().map_or(false, |s| s.len() % 2 == 0),
                |_| "must be even length".to_string(),
            ),
        )]);

        assert_eq!(registry.len(), before + 1);
        assert!(registry.contains("even"));
    }
}

//! Equality and membership rules: is, not, inArray, notInArray

use serde_json::Value;

use crate::registry::Registry;
use crate::rule::Rule;
use crate::text::uc_first;
use crate::value;

// Parameters are always strings, so strict equality against a non-string
// value is always false.
fn equals_param(value: &Value, param: &str) -> bool {
    value.as_str() == Some(param)
}

pub(crate) fn install(registry: &mut Registry) {
    registry.register(
        "is",
        Rule::with_param(equals_param, |_, param| {
            uc_first(&format!("this field must be {}", param))
        }),
    );

    registry.register(
        "not",
        Rule::with_param(
            |value, param| !equals_param(value, param),
            |_, param| uc_first(&format!("this field must NOT be {}", param)),
        ),
    );

    registry.register(
        "inArray",
        Rule::with_params(
            |value, params| {
                !value::is_falsy(value) && params.iter().any(|p| equals_param(value, p))
            },
            |_, params| {
                uc_first(&format!(
                    "this field has to contain any of these {}",
                    params.join(", ")
                ))
            },
        ),
    );

    registry.register(
        "notInArray",
        Rule::with_params(
            // Passes only when no element equals the value.
            |value, params| {
                !value::is_falsy(value) && params.iter().all(|p| !equals_param(value, p))
            },
            |_, params| {
                uc_first(&format!(
                    "this field cannot contain any of these {}",
                    params.join(", ")
                ))
            },
        ),
    );
}

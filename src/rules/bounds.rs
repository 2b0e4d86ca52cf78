//! Bounds rules: min, max, length
//!
//! `min` and `max` compare numerically when the underlying value is a
//! number and by string length otherwise; their messages mirror that
//! split. Parameters that do not parse as numbers fail the test, they
//! never panic.

use serde_json::Value;

use crate::registry::Registry;
use crate::rule::Rule;
use crate::text::uc_first;
use crate::value;

fn measure(value: &Value) -> f64 {
    value::display(value).chars().count() as f64
}

fn min_test(value: &Value, param: &str) -> bool {
    if value::is_falsy(value) {
        return false;
    }
    let Ok(bound) = param.parse::<f64>() else {
        return false;
    };
    match value::as_number(value) {
        Some(number) if value::is_numeric(value) => number >= bound,
        _ => measure(value) >= bound,
    }
}

fn max_test(value: &Value, param: &str) -> bool {
    if value::is_falsy(value) {
        return false;
    }
    let Ok(bound) = param.parse::<f64>() else {
        return false;
    };
    match value::as_number(value) {
        Some(number) if value::is_numeric(value) => number <= bound,
        _ => measure(value) <= bound,
    }
}

pub(crate) fn install(registry: &mut Registry) {
    registry.register(
        "min",
        Rule::with_param_echo(min_test, |_, param, value| {
            if value::is_numeric(value) {
                uc_first(&format!("this field has to be at least {}", param))
            } else {
                uc_first(&format!(
                    "this field has to contain at least {} characters",
                    param
                ))
            }
        }),
    );

    registry.register(
        "max",
        Rule::with_param_echo(max_test, |_, param, value| {
            if value::is_numeric(value) {
                uc_first(&format!("this field has to be less than {}", param))
            } else {
                uc_first(&format!(
                    "this field has to contain less than {} characters",
                    param
                ))
            }
        }),
    );

    registry.register(
        "length",
        Rule::with_param(
            |value, param| {
                if value::is_falsy(value) {
                    return false;
                }
                // Loose numeric comparison on the stringified length
                param
                    .parse::<f64>()
                    .map_or(false, |expected| measure(value) == expected)
            },
            |_, param| {
                uc_first(&format!(
                    "this field has to be exactly {} characters",
                    param
                ))
            },
        ),
    );
}

#[cfg(test)]
mod tests {
    use crate::error::FieldErrors;
    use crate::form::Form;
    use crate::validator::Validator;
    use serde_json::{json, Value};

    fn check(rules: &str, value: Value) -> FieldErrors {
        let validator = Validator::new();
        let mut form = Form::builder().field_with_value("subject", value, rules).build();
        validator
            .validate_field(&mut form, "subject", None)
            .expect("field has rules");
        form.field("subject").unwrap().errors.clone()
    }

    #[test]
    fn test_min_by_string_length() {
        assert!(check("min:3", json!("abc")).is_clean());
        let errors = check("min:3", json!("ab"));
        assert_eq!(
            errors.first(),
            Some("This field has to contain at least 3 characters")
        );
    }

    #[test]
    fn test_min_by_numeric_value() {
        assert!(check("min:100", json!(150)).is_clean());
        let errors = check("min:100", json!(99));
        assert_eq!(errors.first(), Some("This field has to be at least 100"));
    }

    #[test]
    fn test_max_by_string_length() {
        assert!(check("max:5", json!("hello")).is_clean());
        let errors = check("max:5", json!("overlong"));
        assert_eq!(
            errors.first(),
            Some("This field has to contain less than 5 characters")
        );
    }

    #[test]
    fn test_max_by_numeric_value() {
        assert!(check("max:10", json!(10)).is_clean());
        assert_eq!(
            check("max:10", json!(11)).first(),
            Some("This field has to be less than 10")
        );
    }

    #[test]
    fn test_length_exact() {
        assert!(check("length:4", json!("abcd")).is_clean());
        assert!(check("length:4", json!(1234)).is_clean());
        assert_eq!(
            check("length:4", json!("abc")).first(),
            Some("This field has to be exactly 4 characters")
        );
    }

    #[test]
    fn test_empty_values_fail_bounds() {
        assert!(!check("min:0", json!("")).is_clean());
        assert!(!check("max:10", Value::Null).is_clean());
        assert!(!check("length:0", json!("")).is_clean());
    }

    #[test]
    fn test_unparseable_parameter_fails() {
        assert!(!check("min:abc", json!("hello")).is_clean());
        assert!(!check("max:", json!("hello")).is_clean());
    }
}

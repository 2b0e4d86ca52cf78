//! Truthiness and rendering helpers over dynamically-typed field values

use serde_json::Value;

/// Check whether a value is "empty" in the loose sense used by the
/// `nullable` short-circuit: null, `false`, numeric zero, or the empty
/// string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Check whether a value counts as "present" for the `required` rule:
/// anything except null and the empty string. Note that `0`, `false`,
/// and `"0"` are all present even though they are falsy.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Render a value the way rules inspect it: strings unquoted, everything
/// else through its canonical JSON rendering.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether the value is a JSON number. Bounds rules pick numeric
/// comparison over string-length comparison based on this.
pub fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Numeric view of a value, if it has one.
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));

        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!(" ")));
    }

    #[test]
    fn test_presence_differs_from_falsiness() {
        // 0 and false are falsy but present
        assert!(is_present(&json!(0)));
        assert!(is_present(&json!(false)));
        assert!(is_present(&json!("0")));

        assert!(!is_present(&Value::Null));
        assert!(!is_present(&json!("")));
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(display(&json!("hello")), "hello");
        assert_eq!(display(&json!(42)), "42");
        assert_eq!(display(&json!(3.5)), "3.5");
        assert_eq!(display(&json!(true)), "true");
        assert_eq!(display(&Value::Null), "null");
    }

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric(&json!(42)));
        assert!(is_numeric(&json!(1.5)));
        assert!(!is_numeric(&json!("42")));
        assert!(!is_numeric(&Value::Null));
    }
}

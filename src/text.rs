//! Small text helpers used by error message templates

/// Uppercase the first character of a string.
pub fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Turn a slug-style field name into readable words: `first-name` and
/// `first_name` both become `first name`.
pub fn from_slug(s: &str) -> String {
    s.replace(['-', '_'], " ")
}

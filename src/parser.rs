//! Rule spec mini-language parser
//!
//! A literal spec is a `|`-separated list of rules, each optionally
//! carrying a `:`-prefixed, comma-separated parameter list:
//! `required|min:3|inArray:red,green,blue`. There is no escaping for
//! literal `|`, `:`, or `,` inside parameter values.

/// One parsed rule from a spec string, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub name: String,
    pub params: Vec<String>,
}

/// Parse a literal rule spec into an ordered rule list. Segments split
/// on the first `:` only, so a stray extra colon lands inside the first
/// parameter rather than vanishing.
pub fn parse(spec: &str) -> Vec<ParsedRule> {
    spec.split('|')
        .map(|segment| match segment.split_once(':') {
            Some((name, rest)) => ParsedRule {
                name: name.to_string(),
                params: rest.split(',').map(str::to_string).collect(),
            },
            None => ParsedRule {
                name: segment.to_string(),
                params: Vec::new(),
            },
        })
        .collect()
}

/// Whether the parsed rule list carries the reserved `nullable` token,
/// which makes an empty value skip the whole list.
pub fn has_nullable(rules: &[ParsedRule]) -> bool {
    rules.iter().any(|rule| rule.name == "nullable")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, params: &[&str]) -> ParsedRule {
        ParsedRule {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_single_rule() {
        assert_eq!(parse("required"), vec![rule("required", &[])]);
    }

    #[test]
    fn test_parse_rule_with_single_param() {
        assert_eq!(parse("min:3"), vec![rule("min", &["3"])]);
    }

    #[test]
    fn test_parse_rule_with_param_list() {
        assert_eq!(
            parse("inArray:red,green,blue"),
            vec![rule("inArray", &["red", "green", "blue"])]
        );
    }

    #[test]
    fn test_parse_preserves_declaration_order() {
        assert_eq!(
            parse("required|email|min:3"),
            vec![
                rule("required", &[]),
                rule("email", &[]),
                rule("min", &["3"]),
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        assert_eq!(parse("is:a:b"), vec![rule("is", &["a:b"])]);
    }

    #[test]
    fn test_parse_empty_pieces() {
        // Odd inputs parse into odd rules; resolution skips them later
        assert_eq!(parse(""), vec![rule("", &[])]);
        assert_eq!(parse("min:"), vec![rule("min", &[""])]);
        assert_eq!(
            parse("required||email"),
            vec![rule("required", &[]), rule("", &[]), rule("email", &[])]
        );
    }

    #[test]
    fn test_has_nullable_token() {
        assert!(has_nullable(&parse("nullable|min:5")));
        assert!(has_nullable(&parse("min:5|nullable")));
        assert!(!has_nullable(&parse("required|min:5")));
        // Token match, not substring match
        assert!(!has_nullable(&parse("nullableish")));
    }
}

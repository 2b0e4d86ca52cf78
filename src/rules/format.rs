//! Format rules: email, privateEmail, url, alpha, number, alphaNum,
//! alphaNumPunct, name, phone

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::registry::Registry;
use crate::rule::Rule;
use crate::text::{from_slug, uc_first};
use crate::value;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    // RFC-5322-lite: quoted or dotted local part, domain name or
    // bracketed IPv4 literal.
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?|chrome)://[^\s$.?#].[^\s]*$").expect("url pattern compiles")
});

static ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z A-Z]+$").expect("alpha pattern compiles"));

static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern compiles"));

static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").expect("letters pattern compiles"));

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digits pattern compiles"));

static PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!@#$%^&*()\-_+~`{}\[\]\\;:'"<>,.?/]+"#).expect("punct pattern compiles")
});

// Two or more whitespace-separated word tokens of length >= 2.
static FULL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w{2}(\s\w{2})+").expect("name pattern compiles"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?(234|0)(7|8|9)(0|1)\d{8}$").expect("phone pattern compiles"));

fn matches_text(value: &Value, pattern: &Regex) -> bool {
    // Empty values fail outright; format rules want substance.
    !value::is_falsy(value) && pattern.is_match(&value::display(value))
}

pub(crate) fn install(registry: &mut Registry, denylist: Vec<String>) {
    registry.register(
        "email",
        Rule::value(
            // Empty passes; pair with `required` to also demand presence.
            |v| value::is_falsy(v) || EMAIL.is_match(&value::display(v)),
            |_| uc_first("this email is invalid"),
        ),
    );

    let domains: Vec<String> = denylist.into_iter().map(|d| d.to_lowercase()).collect();
    registry.register(
        "privateEmail",
        Rule::value(
            move |v| {
                if value::is_falsy(v) {
                    return true;
                }
                let address = value::display(v).to_lowercase();
                !domains
                    .iter()
                    .any(|domain| address.ends_with(&format!("@{}", domain)))
            },
            |_| uc_first("this email must be a private email"),
        ),
    );

    registry.register(
        "url",
        Rule::value(
            |v| value::is_falsy(v) || URL.is_match(&value::display(v)),
            |_| uc_first("this url is invalid"),
        ),
    );

    registry.register(
        "alpha",
        Rule::value(
            |v| matches_text(v, &ALPHA),
            |_| uc_first("this field can only contain letters"),
        ),
    );

    registry.register(
        "number",
        Rule::value(
            |v| matches_text(v, &DIGITS_ONLY),
            |_| uc_first("this field can only contain numbers"),
        ),
    );

    registry.register(
        "alphaNum",
        Rule::value(
            |v| matches_text(v, &LETTERS) && DIGITS.is_match(&value::display(v)),
            |_| uc_first("this field must contain letters and numbers"),
        ),
    );

    registry.register(
        "alphaNumPunct",
        Rule::value(
            |v| {
                let text = value::display(v);
                !value::is_falsy(v)
                    && LETTERS.is_match(&text)
                    && DIGITS.is_match(&text)
                    && PUNCT.is_match(&text)
            },
            |_| uc_first("this field must contain letters, numbers and punctuation"),
        ),
    );

    registry.register(
        "name",
        Rule::value(
            |v| matches_text(v, &FULL_NAME),
            |name| uc_first(&format!("the {} has to be a proper full name", from_slug(name))),
        ),
    );

    registry.register(
        "phone",
        Rule::value(
            |v| matches_text(v, &PHONE),
            |_| uc_first("the phone number has to be a valid national number"),
        ),
    );
}

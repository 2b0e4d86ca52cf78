//! Bundled denylist of public email-provider domains
//!
//! The `privateEmail` rule suffix-matches an address against this list.
//! Hosts with their own denylist resource supply it through
//! [`Registry::with_denylist`](crate::Registry::with_denylist).

/// Default ordered list of public email-provider domains.
pub const PUBLIC_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "yahoo.co.uk",
    "ymail.com",
    "hotmail.com",
    "hotmail.co.uk",
    "outlook.com",
    "live.com",
    "msn.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "mac.com",
    "protonmail.com",
    "proton.me",
    "zoho.com",
    "mail.com",
    "gmx.com",
    "gmx.net",
    "yandex.com",
    "yandex.ru",
    "fastmail.com",
    "hey.com",
    "tutanota.com",
    "inbox.com",
    "rocketmail.com",
];

/// The default denylist as owned strings, ready for a registry.
pub fn default_denylist() -> Vec<String> {
    PUBLIC_EMAIL_DOMAINS.iter().map(|s| s.to_string()).collect()
}

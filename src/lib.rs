//! # formic
//!
//! Declarative field validation engine. Fields carry a value and a rule
//! spec written in a compact pipe-delimited mini-language
//! (`"required|min:3|same:password"`) or as a bare predicate; the
//! engine resolves each rule against a registry, applies the `nullable`
//! short-circuit, and writes an ordered error bag back onto the field.
//!
//! ```
//! use formic::{Form, Validator};
//! use serde_json::json;
//!
//! let validator = Validator::new();
//! let mut form = Form::builder()
//!     .field_with_value("email", json!("grace@example.com"), "required|email")
//!     .field_with_value("password", json!("hunter2"), "required|min:6")
//!     .field_with_value("password_confirmation", json!("hunter2"), "same:password")
//!     .build();
//!
//! let valid = validator.validate_form(&mut form).unwrap();
//! assert!(valid);
//! ```
//!
//! Validation failures are data, never `Err`: only configuration
//! mistakes (a field without rules, an unknown field name) abort a
//! pass. Custom rules merge over the built-ins by name through
//! [`Registry::merge`].

pub mod denylist;
pub mod error;
pub mod field;
pub mod form;
pub mod parser;
pub mod registry;
pub mod remote;
pub mod rule;
mod rules;
pub mod text;
pub mod validator;
pub mod value;

pub use error::{ErrorBag, FieldErrors, ValidateError};
pub use field::{Field, FieldDescriptor, FieldInit, PredicateResult, RuleSpec};
pub use form::{Form, FormBuilder};
pub use parser::{parse, ParsedRule};
pub use registry::Registry;
pub use remote::{RemoteBody, RemoteError, RemoteResponse};
pub use rule::{FileInput, Rule, RuleMessage, RuleTest};
pub use validator::{ElementLookup, NoElements, Validator};

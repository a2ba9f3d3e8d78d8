//! Validator vocabulary for form fields

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// RFC-5322 subset: unreserved local part, `@`, then dot-separated domain
/// labels of alphanumerics and hyphens.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&’*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("email pattern compiles")
});

/// Validation rule for a form field.
///
/// A failing rule is also the error tag the field reports, so the tags
/// double as error codes. "No rules" is an empty validator list and "no
/// error" is `None` on the field - the two are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validator {
    /// Value must be non-empty once the form has been submitted
    Required,
    /// Value must match the email pattern once the user has edited the field
    Email,
    /// Value must equal another field's current value
    MatchesField,
}

impl Validator {
    /// Stable tag name, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::MatchesField => "matchesField",
        }
    }
}

/// Check a value against the email pattern
pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

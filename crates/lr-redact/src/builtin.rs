//! Built-in redaction functions.
//!
//! Three redactors ship with the crate. `password` and `api_key` keep their
//! literal `key=` prefix and template only the value; `email` replaces the
//! whole address with the token.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::redactor::{replace_all, Redactor};

/// Token used by the default formatter configuration.
pub const DEFAULT_REPLACEMENT_TOKEN: &str = "[REDACTED]";

// Pre-compiled patterns. Whitespace and word boundaries are ASCII-only:
// a value runs up to the next `\t \n \f \r` or space (so U+00A0 stays
// inside it), and any non-ASCII letter counts as a boundary before an address.
static PASSWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"password=[^\t\n\f\r ]+").unwrap());

static API_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"api_key=[^\t\n\f\r ]+").unwrap());

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)").unwrap()
});

/// Redact `password=<value>` pairs, keeping the `password=` prefix.
pub fn password(text: &str, token: &str) -> String {
    replace_all(&PASSWORD_PATTERN, text, &format!("password={token}"))
}

/// Redact `api_key=<value>` pairs, keeping the `api_key=` prefix.
pub fn api_key(text: &str, token: &str) -> String {
    replace_all(&API_KEY_PATTERN, text, &format!("api_key={token}"))
}

/// Replace email addresses with the token.
pub fn email(text: &str, token: &str) -> String {
    replace_all(&EMAIL_PATTERN, text, token)
}

/// The default redactors, in application order: password, API key, email.
pub fn defaults() -> Vec<Redactor> {
    BuiltinRedactor::ALL.iter().map(|b| b.redactor()).collect()
}

/// Names of the built-in redactors, usable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinRedactor {
    /// `password=<value>`
    Password,
    /// `api_key=<value>`
    ApiKey,
    /// Email addresses
    Email,
}

impl BuiltinRedactor {
    /// All built-ins in their default order.
    pub const ALL: [BuiltinRedactor; 3] = [
        BuiltinRedactor::Password,
        BuiltinRedactor::ApiKey,
        BuiltinRedactor::Email,
    ];

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "password" => Some(BuiltinRedactor::Password),
            "api_key" | "apikey" | "api-key" => Some(BuiltinRedactor::ApiKey),
            "email" => Some(BuiltinRedactor::Email),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinRedactor::Password => "password",
            BuiltinRedactor::ApiKey => "api_key",
            BuiltinRedactor::Email => "email",
        }
    }

    /// Run this built-in directly.
    pub fn apply(&self, text: &str, token: &str) -> String {
        match self {
            BuiltinRedactor::Password => password(text, token),
            BuiltinRedactor::ApiKey => api_key(text, token),
            BuiltinRedactor::Email => email(text, token),
        }
    }

    /// Wrap this built-in as a [`Redactor`].
    pub fn redactor(&self) -> Redactor {
        match self {
            BuiltinRedactor::Password => Redactor::from_fn(self.name(), password),
            BuiltinRedactor::ApiKey => Redactor::from_fn(self.name(), api_key),
            BuiltinRedactor::Email => Redactor::from_fn(self.name(), email),
        }
    }
}

impl std::fmt::Display for BuiltinRedactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

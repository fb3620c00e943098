//! The redaction function type.
//!
//! A [`Redactor`] is a named pure function `(text, token) -> text`. It holds
//! no mutable state, so one instance can be applied from any number of
//! logging threads at once.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::{NoExpand, Regex};

use crate::{RedactionError, Result};

/// Signature shared by every redaction function.
///
/// The first argument is the text to scan, the second the replacement token
/// configured on the formatter.
pub type RedactionFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// How a pattern match is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Replace the entire match with the token.
    Whole,
    /// Replace the entire match with a literal prefix followed by the token.
    Prefixed(String),
}

impl Replacement {
    /// Render the literal text that replaces each match.
    pub fn render(&self, token: &str) -> String {
        match self {
            Replacement::Whole => token.to_string(),
            Replacement::Prefixed(prefix) => format!("{prefix}{token}"),
        }
    }
}

/// A named redaction function.
#[derive(Clone)]
pub struct Redactor {
    name: Cow<'static, str>,
    func: Arc<RedactionFn>,
}

impl Redactor {
    /// Wrap an arbitrary function.
    ///
    /// The function must be total: it must return for every input, including
    /// the empty string, and must return its input unchanged when nothing
    /// matches.
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Compile `pattern` and build a redactor replacing every match.
    ///
    /// Compilation happens once, here. An invalid pattern is reported as
    /// [`RedactionError::PatternError`].
    pub fn regex(
        name: impl Into<Cow<'static, str>>,
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| RedactionError::pattern(name.as_ref(), &e))?;
        Ok(Self::from_regex(name, regex, replacement))
    }

    /// Build a redactor from an already compiled regex.
    pub fn from_regex(
        name: impl Into<Cow<'static, str>>,
        regex: Regex,
        replacement: Replacement,
    ) -> Self {
        Self::from_fn(name, move |text, token| {
            replace_all(&regex, text, &replacement.render(token))
        })
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the redaction function.
    pub fn apply(&self, text: &str, token: &str) -> String {
        (self.func)(text, token)
    }
}

impl fmt::Debug for Redactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Redactor").field("name", &self.name).finish()
    }
}

/// Replace every match of `regex` with `with`, taken literally.
///
/// `$` in the replacement is never expanded as a capture reference, so a
/// token like `$1` is inserted as typed.
pub(crate) fn replace_all(regex: &Regex, text: &str, with: &str) -> String {
    regex.replace_all(text, NoExpand(with)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_applies_closure() {
        let upper = Redactor::from_fn("upper", |text, _| text.to_uppercase());
        assert_eq!(upper.name(), "upper");
        assert_eq!(upper.apply("abc", "[X]"), "ABC");
    }

    #[test]
    fn regex_whole_replaces_every_match() {
        let r = Redactor::regex("digits", r"\d+", Replacement::Whole).unwrap();
        assert_eq!(r.apply("a1 b22 c333", "#"), "a# b# c#");
    }

    #[test]
    fn regex_prefixed_keeps_prefix() {
        let r = Redactor::regex(
            "token",
            r"token=\S+",
            Replacement::Prefixed("token=".to_string()),
        )
        .unwrap();
        assert_eq!(r.apply("token=abc next", "***"), "token=*** next");
    }

    #[test]
    fn regex_no_match_is_identity() {
        let r = Redactor::regex("digits", r"\d+", Replacement::Whole).unwrap();
        assert_eq!(r.apply("no numbers here", "#"), "no numbers here");
        assert_eq!(r.apply("", "#"), "");
    }

    #[test]
    fn token_dollar_signs_are_literal() {
        let r = Redactor::regex("word", r"(secret)", Replacement::Whole).unwrap();
        assert_eq!(r.apply("a secret b", "$1"), "a $1 b");
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Redactor::regex("broken", "[a-", Replacement::Whole).unwrap_err();
        match err {
            RedactionError::PatternError { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn debug_shows_name_only() {
        let r = Redactor::from_fn("noop", |text, _| text.to_string());
        assert_eq!(format!("{r:?}"), "Redactor { name: \"noop\" }");
    }

    #[test]
    fn replacement_render() {
        assert_eq!(Replacement::Whole.render("[R]"), "[R]");
        assert_eq!(
            Replacement::Prefixed("pw=".to_string()).render("[R]"),
            "pw=[R]"
        );
    }
}

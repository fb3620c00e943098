//! The redacting formatter.
//!
//! [`RedactingFormatter`] decorates another [`Formatter`]: it lets the inner
//! formatter render the entry, then runs the rendered text through an
//! ordered [`RedactorSet`] with a single shared replacement token.
//!
//! Configuration methods take `&mut self` and chain:
//!
//! ```
//! use lr_format::{Entry, Formatter, Level, RedactingFormatter, TextFormatter};
//! use lr_redact::{Redactor, Replacement};
//!
//! let ssn = Redactor::regex("ssn", r"\d{3}-\d{2}-\d{4}", Replacement::Whole).unwrap();
//!
//! let mut formatter = RedactingFormatter::with_defaults(TextFormatter::new().with_timestamp(false));
//! formatter.add_redactor(ssn).set_replacement_token("***");
//!
//! let out = formatter.format(&Entry::new(Level::Info, "ssn 123-45-6789")).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "level=info msg=\"ssn ***\"\n");
//! ```
//!
//! Once configured, the formatter is only read, so it can be shared across
//! threads behind an `Arc`.

use lr_redact::{RedactionPolicy, Redactor, RedactorSet, DEFAULT_REPLACEMENT_TOKEN};

use crate::{Entry, Formatter, Result};

/// Formatter decorator that masks sensitive substrings in rendered output.
#[derive(Debug, Clone)]
pub struct RedactingFormatter<F> {
    inner: F,
    redactors: RedactorSet,
    replacement_token: String,
}

impl<F: Formatter> RedactingFormatter<F> {
    /// Wrap `inner` with no redactors and an empty replacement token.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            redactors: RedactorSet::new(),
            replacement_token: String::new(),
        }
    }

    /// Wrap `inner` with the password, API key and email redactors and the
    /// `[REDACTED]` token.
    pub fn with_defaults(inner: F) -> Self {
        Self {
            inner,
            redactors: RedactorSet::with_defaults(),
            replacement_token: DEFAULT_REPLACEMENT_TOKEN.to_string(),
        }
    }

    /// Wrap `inner` with the redactors and token described by `policy`.
    pub fn from_policy(inner: F, policy: &RedactionPolicy) -> Result<Self> {
        let redactors = policy.build_set()?;
        Ok(Self {
            inner,
            redactors,
            replacement_token: policy.replacement_token.clone(),
        })
    }

    /// Append one redactor.
    pub fn add_redactor(&mut self, redactor: Redactor) -> &mut Self {
        self.redactors.push(redactor);
        self
    }

    /// Append several redactors in the given order.
    pub fn add_redactors<I>(&mut self, redactors: I) -> &mut Self
    where
        I: IntoIterator<Item = Redactor>,
    {
        self.redactors.push_all(redactors);
        self
    }

    /// Replace the token shared by every redactor.
    pub fn set_replacement_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.replacement_token = token.into();
        self
    }

    /// The wrapped formatter.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Registered redactors, in application order.
    pub fn redactors(&self) -> &RedactorSet {
        &self.redactors
    }

    /// The shared replacement token.
    pub fn replacement_token(&self) -> &str {
        &self.replacement_token
    }

    /// Run the redactor pipeline over already rendered text.
    pub fn redact(&self, text: &str) -> String {
        self.redactors.apply(text, &self.replacement_token)
    }
}

impl<F: Formatter> Formatter for RedactingFormatter<F> {
    /// Render with the inner formatter, then redact.
    ///
    /// An inner failure is returned as-is and nothing is redacted. Output
    /// that is not valid UTF-8 is converted lossily before redaction.
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let rendered = self.inner.format(entry)?;
        let text = String::from_utf8_lossy(&rendered);
        Ok(self.redact(&text).into_bytes())
    }
}

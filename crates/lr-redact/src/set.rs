//! Ordered redactor sequence.

use crate::builtin;
use crate::Redactor;

/// An ordered, append-only sequence of redactors.
///
/// Registration order is application order. Duplicates are kept and run
/// once per registration.
#[derive(Debug, Clone, Default)]
pub struct RedactorSet {
    redactors: Vec<Redactor>,
}

impl RedactorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding the built-in redactors in default order.
    pub fn with_defaults() -> Self {
        Self::from(builtin::defaults())
    }

    /// Append one redactor.
    pub fn push(&mut self, redactor: Redactor) -> &mut Self {
        self.redactors.push(redactor);
        self
    }

    /// Append a batch of redactors, preserving their order.
    pub fn push_all<I>(&mut self, redactors: I) -> &mut Self
    where
        I: IntoIterator<Item = Redactor>,
    {
        self.redactors.extend(redactors);
        self
    }

    /// Number of registered redactors.
    pub fn len(&self) -> usize {
        self.redactors.len()
    }

    /// Whether no redactors are registered.
    pub fn is_empty(&self) -> bool {
        self.redactors.is_empty()
    }

    /// Iterate in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Redactor> {
        self.redactors.iter()
    }

    /// Names in application order.
    pub fn names(&self) -> Vec<&str> {
        self.redactors.iter().map(Redactor::name).collect()
    }

    /// Run every redactor over `text`, left to right.
    ///
    /// Each redactor receives the output of the one before it.
    pub fn apply(&self, text: &str, token: &str) -> String {
        let mut output = text.to_string();
        for redactor in &self.redactors {
            output = redactor.apply(&output, token);
        }
        output
    }
}

impl From<Vec<Redactor>> for RedactorSet {
    fn from(redactors: Vec<Redactor>) -> Self {
        Self { redactors }
    }
}

impl FromIterator<Redactor> for RedactorSet {
    fn from_iter<I: IntoIterator<Item = Redactor>>(iter: I) -> Self {
        Self {
            redactors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RedactorSet {
    type Item = &'a Redactor;
    type IntoIter = std::slice::Iter<'a, Redactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.redactors.iter()
    }
}

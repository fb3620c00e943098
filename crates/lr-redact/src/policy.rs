//! Redaction policy configuration.
//!
//! A policy names the replacement token, which built-in redactors to enable
//! and any custom regex redactors. Built-ins run first, in listed order,
//! followed by the custom patterns in listed order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builtin::{BuiltinRedactor, DEFAULT_REPLACEMENT_TOKEN};
use crate::{RedactionError, Redactor, RedactorSet, Replacement, Result};

/// Schema version for the policy file.
pub const POLICY_SCHEMA_VERSION: &str = "1.0.0";

/// Redaction policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Token substituted by every redactor.
    #[serde(default = "default_replacement_token")]
    pub replacement_token: String,

    /// Built-in redactors to enable, in application order.
    #[serde(default = "default_builtins")]
    pub builtins: Vec<BuiltinRedactor>,

    /// Custom regex redactors, applied after the built-ins.
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

fn default_schema_version() -> String {
    POLICY_SCHEMA_VERSION.to_string()
}

fn default_replacement_token() -> String {
    DEFAULT_REPLACEMENT_TOKEN.to_string()
}

fn default_builtins() -> Vec<BuiltinRedactor> {
    BuiltinRedactor::ALL.to_vec()
}

/// Custom regex redactor definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Name of the redactor.
    pub name: String,

    /// Regex pattern.
    pub pattern: String,

    /// Literal text kept in front of the token. When absent the whole match
    /// is replaced by the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PatternRule {
    /// Create a whole-match rule.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            prefix: None,
            description: None,
        }
    }

    /// Keep `prefix` in front of the token.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// How matches of this rule are rewritten.
    pub fn replacement(&self) -> Replacement {
        match &self.prefix {
            Some(prefix) => Replacement::Prefixed(prefix.clone()),
            None => Replacement::Whole,
        }
    }

    /// Compile into a redactor.
    pub fn compile(&self) -> Result<Redactor> {
        if self.name.trim().is_empty() {
            return Err(RedactionError::PolicyError(format!(
                "pattern '{}' has an empty name",
                self.pattern
            )));
        }
        Redactor::regex(self.name.clone(), &self.pattern, self.replacement())
    }
}

impl RedactionPolicy {
    /// Create a new policy with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy with no redactors and an empty token.
    pub fn empty() -> Self {
        Self {
            schema_version: default_schema_version(),
            replacement_token: String::new(),
            builtins: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Load policy from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a policy from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        let policy: RedactionPolicy = serde_json::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Save policy to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Append a custom pattern.
    pub fn with_pattern(mut self, rule: PatternRule) -> Self {
        self.patterns.push(rule);
        self
    }

    /// Check the schema version and every custom pattern.
    pub fn validate(&self) -> Result<()> {
        let major = self.schema_version.split('.').next().unwrap_or_default();
        if major != "1" {
            return Err(RedactionError::PolicyError(format!(
                "unsupported schema version {} (expected {})",
                self.schema_version, POLICY_SCHEMA_VERSION
            )));
        }
        for rule in &self.patterns {
            rule.compile()?;
        }
        Ok(())
    }

    /// Build the redactor sequence described by this policy.
    pub fn build_set(&self) -> Result<RedactorSet> {
        let mut set = RedactorSet::new();
        set.push_all(self.builtins.iter().map(BuiltinRedactor::redactor));
        for rule in &self.patterns {
            set.push(rule.compile()?);
        }
        tracing::debug!(
            builtins = self.builtins.len(),
            patterns = self.patterns.len(),
            "built redactor set from policy"
        );
        Ok(set)
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            replacement_token: default_replacement_token(),
            builtins: default_builtins(),
            patterns: Vec::new(),
        }
    }
}

//! Human-readable `key=value` formatter.
//!
//! Produces one line per entry:
//!
//! ```text
//! time=2026-01-15T14:30:22Z level=info msg="user signed in" target=app::auth user=alice
//! ```
//!
//! Values made only of letters, digits and `-._/@^+:` are written bare;
//! anything else is quoted with escapes.

use std::fmt::Write as _;

use chrono::SecondsFormat;

use crate::{Entry, Formatter, Result};

/// Plain-text line formatter.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    disable_timestamp: bool,
    disable_target: bool,
}

impl TextFormatter {
    /// Create a formatter with timestamps and targets enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the `time=` key.
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.disable_timestamp = !enabled;
        self
    }

    /// Enable or disable the `target=` key.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.disable_target = !enabled;
        self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut line = String::with_capacity(64 + entry.message.len());

        if !self.disable_timestamp {
            let ts = entry.time.to_rfc3339_opts(SecondsFormat::Secs, true);
            push_pair(&mut line, "time", &ts);
        }
        push_pair(&mut line, "level", entry.level.as_str());
        push_pair(&mut line, "msg", &entry.message);
        if !self.disable_target && !entry.target.is_empty() {
            push_pair(&mut line, "target", &entry.target);
        }
        for (key, value) in &entry.fields {
            match value {
                serde_json::Value::String(s) => push_pair(&mut line, key, s),
                other => push_pair(&mut line, key, &other.to_string()),
            }
        }

        line.push('\n');
        Ok(line.into_bytes())
    }
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(key);
    line.push('=');
    if needs_quoting(value) {
        let _ = write!(line, "{:?}", value);
    } else {
        line.push_str(value);
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+' | ':'))
}

//! JSON lines formatter.
//!
//! Emits one JSON object per entry with `time`, `level`, `msg`, `target` and
//! every structured field at the top level. A field whose key collides with
//! one of those reserved keys is renamed `fields.<key>`.

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::{Entry, Formatter, Result};

const RESERVED_KEYS: [&str; 4] = ["time", "level", "msg", "target"];

/// JSON object formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    disable_timestamp: bool,
    pretty: bool,
}

impl JsonFormatter {
    /// Create a compact formatter with timestamps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the `time` key.
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.disable_timestamp = !enabled;
        self
    }

    /// Indent the output across several lines.
    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut obj = Map::new();

        for (key, value) in &entry.fields {
            let key = if RESERVED_KEYS.contains(&key.as_str()) {
                format!("fields.{key}")
            } else {
                key.clone()
            };
            obj.insert(key, value.clone());
        }

        if !self.disable_timestamp {
            obj.insert(
                "time".to_string(),
                Value::String(entry.time.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
        obj.insert("level".to_string(), Value::String(entry.level.to_string()));
        obj.insert("msg".to_string(), Value::String(entry.message.clone()));
        if !entry.target.is_empty() {
            obj.insert("target".to_string(), Value::String(entry.target.clone()));
        }

        let value = Value::Object(obj);
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

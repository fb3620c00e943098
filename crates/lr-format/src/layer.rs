//! Tracing layer that renders events through a [`Formatter`].
//!
//! This is where a redacting formatter gets installed into the host logging
//! framework: every `tracing` event becomes an [`Entry`], the formatter turns
//! it into bytes, and the bytes go to the configured writer.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::{Entry, Formatter, Level};

/// A visitor that extracts field values from tracing events.
struct EntryVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
    message: Option<String>,
}

impl EntryVisitor {
    fn new() -> Self {
        EntryVisitor {
            fields: serde_json::Map::new(),
            message: None,
        }
    }
}

impl tracing::field::Visit for EntryVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(s);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(s));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::Number(value.into()),
        );
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::Number(value.into()),
        );
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(n));
        }
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }
}

/// Build an [`Entry`] from a tracing event.
pub fn entry_from_event(event: &Event<'_>) -> Entry {
    let mut visitor = EntryVisitor::new();
    event.record(&mut visitor);

    let metadata = event.metadata();
    Entry {
        time: Utc::now(),
        level: Level::from(*metadata.level()),
        target: metadata.target().to_string(),
        message: visitor.message.unwrap_or_default(),
        fields: visitor.fields.into_iter().collect(),
    }
}

/// Layer that formats each event and writes the bytes to a sink.
pub struct FormatLayer<F, W = io::Stderr> {
    formatter: F,
    writer: Mutex<W>,
}

impl<F: Formatter> FormatLayer<F, io::Stderr> {
    /// Write formatted events to stderr.
    pub fn stderr(formatter: F) -> Self {
        FormatLayer::new(formatter, io::stderr())
    }
}

impl<F: Formatter> FormatLayer<F, io::Stdout> {
    /// Write formatted events to stdout.
    pub fn stdout(formatter: F) -> Self {
        FormatLayer::new(formatter, io::stdout())
    }
}

impl<F: Formatter, W: Write> FormatLayer<F, W> {
    /// Write formatted events to a custom writer.
    pub fn new(formatter: F, writer: W) -> Self {
        FormatLayer {
            formatter,
            writer: Mutex::new(writer),
        }
    }
}

impl<S, F, W> Layer<S> for FormatLayer<F, W>
where
    S: Subscriber,
    F: Formatter + 'static,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let entry = entry_from_event(event);
        match self.formatter.format(&entry) {
            Ok(bytes) => {
                // A panic in another writer must not silence later events.
                let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
                let _ = writer.write_all(&bytes);
                let _ = writer.flush();
            }
            // Reported outside of tracing so a broken formatter cannot recurse.
            Err(err) => eprintln!("lr-format: failed to format log entry: {err}"),
        }
    }
}

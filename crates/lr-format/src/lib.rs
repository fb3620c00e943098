//! Redacting log formatter.
//!
//! Wraps an existing formatter and rewrites every rendered line through an
//! ordered set of redactors before it reaches the sink.
//!
//! # Usage
//!
//! ```no_run
//! use lr_format::{init_logging, LogConfig, RedactingFormatter, TextFormatter};
//!
//! let config = LogConfig::from_env(None, None);
//! let formatter = RedactingFormatter::with_defaults(TextFormatter::new());
//! init_logging(&config, formatter).expect("logging already initialized");
//!
//! tracing::info!("User logged in with password=secret123 and email=user@example.com");
//! // level=info msg="User logged in with password=[REDACTED] and email=[REDACTED]" ...
//! ```
//!
//! # Design Notes
//!
//! - The redaction core never logs; an inner formatter failure is returned
//!   to the caller untouched.
//! - Log output goes to stderr unless `init_logging_stdout` or a custom
//!   writer is used.

pub mod config;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod json;
pub mod layer;
pub mod redacting;
pub mod text;

pub use config::{LogConfig, LogFormat, LogLevel};
pub use entry::{Entry, Level};
pub use error::{FormatError, Result};
pub use formatter::Formatter;
pub use json::JsonFormatter;
pub use layer::FormatLayer;
pub use redacting::RedactingFormatter;
pub use text::TextFormatter;

use std::io::Write;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Install `formatter` as the global log formatter, writing to stderr.
///
/// Filters with [`LogConfig::env_filter`]: `RUST_LOG` directives unless an
/// explicit level was configured.
pub fn init_logging<F>(config: &LogConfig, formatter: F) -> std::result::Result<(), TryInitError>
where
    F: Formatter + 'static,
{
    install(config, FormatLayer::stderr(formatter))
}

/// Install `formatter` as the global log formatter, writing to stdout.
pub fn init_logging_stdout<F>(
    config: &LogConfig,
    formatter: F,
) -> std::result::Result<(), TryInitError>
where
    F: Formatter + 'static,
{
    install(config, FormatLayer::stdout(formatter))
}

/// Install `formatter` as the global log formatter with a custom writer.
pub fn init_logging_with_writer<F, W>(
    config: &LogConfig,
    formatter: F,
    writer: W,
) -> std::result::Result<(), TryInitError>
where
    F: Formatter + 'static,
    W: Write + Send + 'static,
{
    install(config, FormatLayer::new(formatter, writer))
}

fn install<F, W>(config: &LogConfig, layer: FormatLayer<F, W>) -> std::result::Result<(), TryInitError>
where
    F: Formatter + 'static,
    W: Write + Send + 'static,
{
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()
}

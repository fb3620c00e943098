//! Redaction functions for rendered log lines.
//!
//! This crate provides the ordered set of text transformations that the
//! redacting log formatter pipes every rendered line through.
//!
//! # Key Features
//!
//! - **Built-in redactors**: `password=...`, `api_key=...` and email addresses.
//! - **Custom redactors**: any closure, or a caller-supplied regular expression
//!   compiled once at construction.
//! - **Ordered application**: redactors run strictly in registration order,
//!   each one seeing the output of its predecessor.
//! - **Policy files**: the token, built-ins and custom patterns can be loaded
//!   from a JSON policy document.
//!
//! # Example
//!
//! ```
//! use lr_redact::{builtin, RedactorSet, DEFAULT_REPLACEMENT_TOKEN};
//!
//! let set = RedactorSet::from(builtin::defaults());
//! let line = set.apply("login password=hunter2 from ops@example.com", DEFAULT_REPLACEMENT_TOKEN);
//! assert_eq!(line, "login password=[REDACTED] from [REDACTED]");
//! ```

pub mod builtin;
pub mod error;
pub mod policy;
pub mod redactor;
pub mod set;

pub use builtin::{BuiltinRedactor, DEFAULT_REPLACEMENT_TOKEN};
pub use error::{RedactionError, Result};
pub use policy::{PatternRule, RedactionPolicy};
pub use redactor::{RedactionFn, Redactor, Replacement};
pub use set::RedactorSet;

//! The formatter capability.
//!
//! Anything that turns an [`Entry`] into bytes implements [`Formatter`]. The
//! redacting formatter both consumes and implements this trait, so it can be
//! installed anywhere a plain formatter is accepted.

use std::sync::Arc;

use crate::{Entry, Result};

/// Renders a log entry to bytes.
///
/// Implementations must be shareable across logging threads.
pub trait Formatter: Send + Sync {
    /// Render one entry.
    fn format(&self, entry: &Entry) -> Result<Vec<u8>>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        (**self).format(entry)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        (**self).format(entry)
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        (**self).format(entry)
    }
}

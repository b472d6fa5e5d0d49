//! Chained domain errors.
//!
//! Every error crossing a port or use-case boundary implements [`BaseError`].
//! A link may point at the error it was translated from, forming a finite
//! chain from the most specific failure down to the root cause. The chain is
//! diagnostic only; control flow matches on the concrete enums.

use std::fmt;

/// Separator placed between links of a rendered error trace.
pub const CAUSED_BY_SEPARATOR: &str = "\n  Caused by: ";

/// Common behaviour of chained domain errors.
pub trait BaseError: fmt::Debug + Send + Sync {
    /// Variant name used as the label of this link in a trace.
    fn kind(&self) -> &'static str;

    /// Human-readable message of this link.
    fn message(&self) -> &str;

    /// The error this one was translated from, if any.
    fn source_error(&self) -> Option<&dyn BaseError>;

    /// Render the chain as `<kind>: <message>` lines, root cause last.
    fn error_trace(&self) -> String {
        let mut lines = vec![format!("{}: {}", self.kind(), self.message())];
        let mut current = self.source_error();
        while let Some(error) = current {
            lines.push(format!("{}: {}", error.kind(), error.message()));
            current = error.source_error();
        }
        lines.join(CAUSED_BY_SEPARATOR)
    }

    /// Number of links in the chain, including `self`.
    fn chain_len(&self) -> usize {
        let mut len = 1;
        let mut current = self.source_error();
        while let Some(error) = current {
            len += 1;
            current = error.source_error();
        }
        len
    }
}

impl dyn BaseError + '_ {
    /// Iterate the chain starting at this error.
    pub fn chain(&self) -> ErrorChain<'_> {
        ErrorChain { next: Some(self) }
    }

    /// The last link of the chain.
    pub fn root_cause(&self) -> &dyn BaseError {
        let mut current: &dyn BaseError = self;
        while let Some(next) = current.source_error() {
            current = next;
        }
        current
    }
}

/// Iterator over the links of an error chain.
pub struct ErrorChain<'a> {
    next: Option<&'a dyn BaseError>,
}

impl<'a> Iterator for ErrorChain<'a> {
    type Item = &'a dyn BaseError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source_error();
        Some(current)
    }
}

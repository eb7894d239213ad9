//! Annotation Dispatch
//!
//! Severity-based routing into the host's annotation sink, in diagnostic
//! sequence order.

use crate::models::diagnostic::{Category, Diagnostic};

/// Host-side receiver for review annotations.
///
/// Each call is a distinct, fire-and-forget annotation; the host owns
/// delivery and synchronization.
pub trait AnnotationSink {
    fn warn(&mut self, message: &str, file: &str, line: u64);
    fn fail(&mut self, message: &str, file: &str, line: u64);
}

/// Emit one annotation per diagnostic: warnings through [`AnnotationSink::warn`],
/// errors through [`AnnotationSink::fail`]. No reordering, batching, or
/// deduplication.
pub fn dispatch(diagnostics: &[Diagnostic], sink: &mut dyn AnnotationSink) {
    for diagnostic in diagnostics {
        match diagnostic.category {
            Category::Warning => sink.warn(&diagnostic.message, &diagnostic.file, diagnostic.line),
            Category::Error => sink.fail(&diagnostic.message, &diagnostic.file, diagnostic.line),
        }
    }
}

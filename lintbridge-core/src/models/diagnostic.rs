//! Normalized findings routed to the annotation sink

use serde::{Deserialize, Serialize};

use super::report::LintMessage;

/// Review category derived from the linter severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Warning,
    Error,
}

impl Category {
    /// ESLint convention: 1 = warning, 2 = error. Anything above 2 collapses
    /// to [`Category::Error`] as well.
    pub fn from_severity(severity: u8) -> Self {
        if severity >= 2 {
            Category::Error
        } else {
            Category::Warning
        }
    }
}

/// A single normalized finding, with the file expressed relative to the
/// working root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub line: u64,
    pub category: Category,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic from one raw message of a file report.
    pub fn from_message(file: &str, message: &LintMessage) -> Self {
        Self {
            file: file.to_string(),
            line: message.line,
            category: Category::from_severity(message.severity),
            message: message.message.clone(),
        }
    }
}

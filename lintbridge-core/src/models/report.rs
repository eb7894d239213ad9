//! Typed view of the ESLint JSON wire format
//!
//! `eslint -f json` emits one array element per file it reported on. Fields
//! this adapter does not consume (ruleId, column, fix data) are ignored
//! during decoding.

use serde::{Deserialize, Serialize};

/// One file's worth of linter findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Absolute path of the file the linter reported on
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// Findings in source order
    pub messages: Vec<LintMessage>,
}

/// A single finding inside a [`FileReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintMessage {
    pub line: u64,
    /// ESLint severity convention: 1 = warning, 2 = error
    pub severity: u8,
    pub message: String,
}

/// Decode the full report array from captured stdout.
///
/// The payload is decoded in one pass before any further processing. A
/// malformed payload is a decode error, never an empty result.
pub fn parse_reports(stdout: &str) -> crate::Result<Vec<FileReport>> {
    Ok(serde_json::from_str(stdout)?)
}

//! Lint Orchestration
//!
//! One sequential pass from resolved targets to normalized diagnostics: each
//! invocation fully completes before the next begins, and merged ordering is
//! invocation order, then within-invocation order.

use std::path::Path;

use tracing::debug;

use lintbridge_utils::file::relative_to_root;

use crate::external_tools::eslint::LintRunner;
use crate::models::diagnostic::Diagnostic;
use crate::models::invocation::{InvocationTemplate, LintTarget};
use crate::models::report::{parse_reports, FileReport};
use crate::Result;

/// Marker ESLint embeds in its first message when a file was skipped by the
/// ignore file.
///
/// Matching the first message against this substring is approximate: a real
/// finding whose text happens to contain it is dropped too.
const IGNORE_PATTERN_MARKER: &str = "matching ignore pattern";

/// How many reports of a single invocation survive the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRetention {
    /// Aggregate invocations may legitimately report on many files.
    KeepAll,
    /// Per-file invocations target exactly one file; truncate anything extra.
    FirstOnly,
}

/// Drives one run: process per target, decode, filter, flatten.
pub struct LintOrchestrator<'a> {
    runner: &'a dyn LintRunner,
    working_root: &'a Path,
}

impl<'a> LintOrchestrator<'a> {
    pub fn new(runner: &'a dyn LintRunner, working_root: &'a Path) -> Self {
        Self {
            runner,
            working_root,
        }
    }

    /// Run every target in order and flatten the surviving reports into
    /// diagnostics.
    ///
    /// Any process or decode failure on any invocation aborts the whole run;
    /// nothing gathered so far is emitted. An empty target list performs zero
    /// invocations and yields zero diagnostics.
    pub async fn run(
        &self,
        targets: &[LintTarget],
        template: &InvocationTemplate,
        retention: ReportRetention,
    ) -> Result<Vec<Diagnostic>> {
        let mut reports: Vec<FileReport> = Vec::new();
        for target in targets {
            let spec = template.for_target(target);
            let stdout = self.runner.run(&spec).await?;
            let mut parsed = parse_reports(&stdout)?;
            if retention == ReportRetention::FirstOnly {
                parsed.truncate(1);
            }
            reports.extend(parsed);
        }

        let diagnostics: Vec<Diagnostic> = reports
            .iter()
            .filter(|report| !report.messages.is_empty())
            .filter(|report| !report.messages[0].message.contains(IGNORE_PATTERN_MARKER))
            .flat_map(|report| {
                let file = relative_to_root(self.working_root, &report.file_path);
                report
                    .messages
                    .iter()
                    .map(move |message| Diagnostic::from_message(&file, message))
            })
            .collect();

        debug!(
            "{} diagnostic(s) across {} invocation(s)",
            diagnostics.len(),
            targets.len()
        );
        Ok(diagnostics)
    }
}

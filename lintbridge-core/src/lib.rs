//! Lintbridge Core - ESLint Review Adapter
//!
//! This crate turns ESLint runs into review annotations, including:
//! - Target resolution against a changed-file snapshot
//! - Lint process orchestration and JSON result decoding
//! - Severity-based routing into a host annotation sink
//!
//! The embedding host supplies configuration, a [`ChangeSet`], and an
//! [`AnnotationSink`]; everything else is driven from [`EslintReview::lint`].

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,  // Often necessary for clarity
)]

pub mod dispatch;
pub mod external_tools;
pub mod models;
pub mod orchestrator;
pub mod resolve;

use std::path::{Path, PathBuf};

use tracing::debug;

// Re-export commonly used types for convenience
pub use dispatch::AnnotationSink;
pub use external_tools::eslint::{
    locate_eslint, EslintRunner, ExecutableFinder, LintRunner, PathFinder,
};
pub use external_tools::git::{ChangeSet, DiffProvider, GitDiffProvider};
pub use models::diagnostic::{Category, Diagnostic};
pub use models::invocation::{InvocationSpec, InvocationTemplate, LintTarget};
pub use models::report::{parse_reports, FileReport, LintMessage};
pub use orchestrator::{LintOrchestrator, ReportRetention};
pub use resolve::resolve_targets;

/// Result type used throughout lintbridge core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lintbridge core operations
///
/// Nothing here is retried or downgraded: every variant is fatal to the run,
/// and the embedding host decides how to surface it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// ESLint missing from both node_modules/.bin and the search path
    #[error("eslint is not installed")]
    ToolNotInstalled,

    /// Spawn or capture failure, or a disqualifying exit status
    #[error("eslint execution failed: {message}")]
    Process { message: String },

    /// Payload not decodable as the expected report array
    #[error("failed to decode eslint output: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The diff collaborator could not produce a snapshot
    #[error("diff snapshot failed: {message}")]
    Diff { message: String },
}

/// Host-supplied configuration for one review run
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Path to an ESLint config file, forwarded as `-c`
    pub config_file: Option<PathBuf>,
    /// Path to an ESLint ignore file, forwarded as `--ignore-path`
    pub ignore_file: Option<PathBuf>,
    /// Restrict analysis to files changed in the current revision
    pub filtering: bool,
    /// Target expression handed to ESLint; defaults to `.`
    pub target: Option<String>,
}

/// The review adapter: one instance per run, no state retained across runs.
pub struct EslintReview {
    config: LintConfig,
    working_root: PathBuf,
}

impl EslintReview {
    pub fn new(config: LintConfig, working_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            working_root: working_root.into(),
        }
    }

    /// Entry point invoked by the embedding host.
    ///
    /// Locates the ESLint binary, resolves targets against the changed-file
    /// snapshot, lints each target in order, and routes every surviving
    /// finding into `sink`. Any failure aborts the run before anything is
    /// emitted.
    pub async fn lint(&self, changes: &ChangeSet, sink: &mut dyn AnnotationSink) -> Result<()> {
        self.lint_with(&PathFinder, &EslintRunner, changes, sink)
            .await
    }

    /// Same pipeline with injected discovery and process collaborators.
    pub async fn lint_with(
        &self,
        finder: &dyn ExecutableFinder,
        runner: &dyn LintRunner,
        changes: &ChangeSet,
        sink: &mut dyn AnnotationSink,
    ) -> Result<()> {
        let executable = locate_eslint(&self.working_root, finder)?;
        debug!("using eslint at {}", executable.display());

        let targets = resolve::resolve_targets(
            self.config.target.as_deref(),
            self.config.filtering,
            changes,
            &self.working_root,
        );
        let template = InvocationTemplate {
            executable,
            config_file: self.config.config_file.clone(),
            ignore_file: self.config.ignore_file.clone(),
        };
        let retention = if self.config.filtering {
            ReportRetention::FirstOnly
        } else {
            ReportRetention::KeepAll
        };

        let orchestrator = LintOrchestrator::new(runner, &self.working_root);
        let diagnostics = orchestrator.run(&targets, &template, retention).await?;
        dispatch::dispatch(&diagnostics, sink);
        Ok(())
    }

    pub fn working_root(&self) -> &Path {
        &self.working_root
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::dispatch::test_support::RecordingSink;
    use crate::external_tools::eslint::test_support::{ScriptedRunner, StaticFinder};

    fn finder() -> StaticFinder {
        StaticFinder(Some(PathBuf::from("/usr/bin/eslint")))
    }

    fn review(config: LintConfig) -> EslintReview {
        EslintReview::new(config, "/repo")
    }

    #[tokio::test]
    async fn scenario_a_aggregate_run_warns_for_each_report() {
        // filtering disabled, target unset: one "." invocation, two severity-1 reports
        let payload = r#"[
            {"filePath": "/repo/src/a.js", "messages": [{"line": 3, "severity": 1, "message": "prefer const"}]},
            {"filePath": "/repo/lib/b.js", "messages": [{"line": 8, "severity": 1, "message": "no unused vars"}]}
        ]"#;
        let runner = ScriptedRunner::new(&[(".", payload)]);
        let mut sink = RecordingSink::default();

        review(LintConfig::default())
            .lint_with(&finder(), &runner, &ChangeSet::default(), &mut sink)
            .await
            .unwrap();

        assert_eq!(runner.recorded_calls(), vec!["."]);
        assert_eq!(
            sink.warnings,
            vec![
                ("prefer const".to_string(), "src/a.js".to_string(), 3),
                ("no unused vars".to_string(), "lib/b.js".to_string(), 8),
            ]
        );
        assert!(sink.failures.is_empty());
    }

    #[tokio::test]
    async fn scenario_b_filtering_invokes_only_changed_js_files() {
        let payload = r#"[{"filePath": "/repo/src/a.js", "messages": [{"line": 1, "severity": 2, "message": "boom"}]}]"#;
        let runner = ScriptedRunner::new(&[("src/a.js", payload)]);
        let mut sink = RecordingSink::default();
        let changes = ChangeSet {
            modified: vec!["src/a.js".to_string(), "src/b.rb".to_string()],
            ..Default::default()
        };
        let config = LintConfig {
            filtering: true,
            ..Default::default()
        };

        review(config)
            .lint_with(&finder(), &runner, &changes, &mut sink)
            .await
            .unwrap();

        assert_eq!(runner.recorded_calls(), vec!["src/a.js"]);
        assert_eq!(
            sink.failures,
            vec![("boom".to_string(), "src/a.js".to_string(), 1)]
        );
        assert!(sink.warnings.is_empty());
    }

    #[tokio::test]
    async fn scenario_c_out_of_scope_changes_mean_zero_invocations() {
        let runner = ScriptedRunner::new(&[]);
        let mut sink = RecordingSink::default();
        let changes = ChangeSet {
            added: vec!["lib/new.js".to_string()],
            ..Default::default()
        };
        let config = LintConfig {
            filtering: true,
            target: Some("src".to_string()),
            ..Default::default()
        };

        review(config)
            .lint_with(&finder(), &runner, &changes, &mut sink)
            .await
            .unwrap();

        assert!(runner.recorded_calls().is_empty());
        assert!(sink.warnings.is_empty());
        assert!(sink.failures.is_empty());
    }

    #[tokio::test]
    async fn scenario_d_missing_tool_fails_before_any_spawn() {
        let runner = ScriptedRunner::new(&[]);
        let mut sink = RecordingSink::default();

        let err = review(LintConfig::default())
            .lint_with(&StaticFinder(None), &runner, &ChangeSet::default(), &mut sink)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ToolNotInstalled));
        assert!(runner.recorded_calls().is_empty());
        assert!(sink.warnings.is_empty());
        assert!(sink.failures.is_empty());
    }

    #[tokio::test]
    async fn scenario_e_unparseable_output_emits_nothing() {
        let runner = ScriptedRunner::new(&[(".", "Oops, something went wrong")]);
        let mut sink = RecordingSink::default();

        let err = review(LintConfig::default())
            .lint_with(&finder(), &runner, &ChangeSet::default(), &mut sink)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
        assert!(sink.warnings.is_empty());
        assert!(sink.failures.is_empty());
    }

    #[tokio::test]
    async fn config_overrides_reach_the_invocation() {
        // the scripted runner keys on the target, so reaching it at all means
        // the spec carried the overrides without disturbing the target slot
        let payload = r#"[]"#;
        let runner = ScriptedRunner::new(&[("src", payload)]);
        let mut sink = RecordingSink::default();
        let config = LintConfig {
            config_file: Some(PathBuf::from(".eslintrc.ci.json")),
            ignore_file: Some(PathBuf::from(".eslintignore.ci")),
            filtering: false,
            target: Some("src".to_string()),
        };

        review(config)
            .lint_with(&finder(), &runner, &ChangeSet::default(), &mut sink)
            .await
            .unwrap();

        assert_eq!(runner.recorded_calls(), vec!["src"]);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: LintConfig = serde_json::from_str(r#"{"filtering": true}"#).unwrap();
        assert!(config.filtering);
        assert!(config.config_file.is_none());
        assert!(config.ignore_file.is_none());
        assert!(config.target.is_none());
    }
}

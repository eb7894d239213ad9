//! Git Diff Snapshot Collaborator
//!
//! Supplies the changed-file sets target resolution filters against. The
//! snapshot is taken once per run, before resolution begins.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::{Error, Result};

/// Changed-file snapshot: repository-relative paths grouped by change kind,
/// each list in diff enumeration order.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub added: Vec<String>,
}

/// Read-only source of the changed-file snapshot.
#[async_trait]
pub trait DiffProvider {
    async fn snapshot(&self) -> Result<ChangeSet>;
}

/// Provider that shells out to `git diff --name-status`.
pub struct GitDiffProvider {
    working_root: PathBuf,
    base: String,
}

impl GitDiffProvider {
    pub fn new(working_root: impl Into<PathBuf>) -> Self {
        Self {
            working_root: working_root.into(),
            base: "HEAD".to_string(),
        }
    }

    /// Diff against a different base revision, e.g. a merge base.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    fn classify(output: &str) -> ChangeSet {
        let mut changes = ChangeSet::default();
        for line in output.lines() {
            let mut fields = line.split('\t');
            let Some(status) = fields.next() else { continue };
            match (status.chars().next(), fields.next(), fields.next()) {
                (Some('M'), Some(path), _) => changes.modified.push(path.to_string()),
                (Some('A'), Some(path), _) => changes.added.push(path.to_string()),
                (Some('D'), Some(path), _) => changes.deleted.push(path.to_string()),
                // renames carry both sides: the old path leaves, the new one arrives
                (Some('R'), Some(old), Some(new)) => {
                    changes.deleted.push(old.to_string());
                    changes.added.push(new.to_string());
                }
                _ => {}
            }
        }
        changes
    }
}

#[async_trait]
impl DiffProvider for GitDiffProvider {
    async fn snapshot(&self) -> Result<ChangeSet> {
        debug!("snapshotting changed files against {}", self.base);

        let output = Command::new("git")
            .arg("diff")
            .arg("--name-status")
            .arg(&self.base)
            .current_dir(&self.working_root)
            .output()
            .await
            .map_err(|e| Error::Diff {
                message: format!("failed to execute git: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Diff {
                message: format!("git diff exited with {}: {stderr}", output.status),
            });
        }

        Ok(Self::classify(&String::from_utf8_lossy(&output.stdout)))
    }
}

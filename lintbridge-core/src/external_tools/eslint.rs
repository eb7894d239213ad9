//! ESLint Process Integration
//!
//! Binary discovery and per-target invocation. Discovery happens once per
//! run, before any process is spawned; a project-local install always wins
//! over one found on the search path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::models::invocation::InvocationSpec;
use crate::{Error, Result};

/// Relative location of a project-local ESLint install.
const LOCAL_ESLINT_BIN: &str = "node_modules/.bin/eslint";

/// Search-path lookup for a named binary.
pub trait ExecutableFinder {
    fn find_executable(&self, name: &str) -> Option<PathBuf>;
}

/// Finder backed by the system search path.
pub struct PathFinder;

impl ExecutableFinder for PathFinder {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Locate the ESLint binary for this run.
///
/// The project-local `node_modules/.bin/eslint` takes precedence over a
/// binary on the search path. When neither exists the run fails before any
/// invocation is attempted.
pub fn locate_eslint(working_root: &Path, finder: &dyn ExecutableFinder) -> Result<PathBuf> {
    let local = working_root.join(LOCAL_ESLINT_BIN);
    if local.exists() {
        return Ok(local);
    }
    finder
        .find_executable("eslint")
        .ok_or(Error::ToolNotInstalled)
}

/// Executes one lint invocation and yields captured stdout.
#[async_trait]
pub trait LintRunner {
    async fn run(&self, spec: &InvocationSpec) -> Result<String>;
}

/// Runner that spawns the real ESLint process.
pub struct EslintRunner;

#[async_trait]
impl LintRunner for EslintRunner {
    async fn run(&self, spec: &InvocationSpec) -> Result<String> {
        debug!("running eslint on {}", spec.target);

        let output = Command::new(&spec.executable)
            .args(spec.to_args())
            .output()
            .await
            .map_err(|e| Error::Process {
                message: format!("failed to execute eslint: {e}"),
            })?;

        // ESLint exits 1 when findings exist; only other non-zero codes are failures
        if !output.status.success() && output.status.code() != Some(1) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("eslint exited with {}: {}", output.status, stderr);
            return Err(Error::Process {
                message: format!("eslint exited with {}: {stderr}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

//! Target Resolution
//!
//! Decides which path expressions one run hands to ESLint. Without filtering
//! the configured expression is the single aggregate target; with filtering,
//! each surviving changed file becomes its own target.

use std::path::Path;

use tracing::debug;

use lintbridge_utils::file::{path_within, relative_to_root};

use crate::external_tools::git::ChangeSet;
use crate::models::invocation::LintTarget;

/// Target expression used when the host configures none.
const DEFAULT_TARGET: &str = ".";

/// Extension targets are restricted to under filtering.
const JS_EXTENSION: &str = ".js";

/// Resolve the ordered invocation targets for one run.
///
/// With filtering enabled the candidate set is (modified − deleted) ∪ added,
/// in diff enumeration order. A candidate survives only if it lies inside the
/// target expression's subtree and carries the `.js` extension; each survivor
/// becomes its own target, expressed relative to `working_root`. An empty
/// candidate set resolves to an empty target list, which the orchestrator
/// treats as "nothing to lint", not an error.
pub fn resolve_targets(
    target: Option<&str>,
    filtering: bool,
    changes: &ChangeSet,
    working_root: &Path,
) -> Vec<LintTarget> {
    let expr = target.unwrap_or(DEFAULT_TARGET);
    if !filtering {
        return vec![LintTarget(expr.to_string())];
    }

    let targets: Vec<LintTarget> = changes
        .modified
        .iter()
        .filter(|file| !changes.deleted.contains(file))
        .chain(changes.added.iter())
        .filter(|file| path_within(working_root, expr, file))
        .filter(|file| file.ends_with(JS_EXTENSION))
        .map(|file| LintTarget(relative_to_root(working_root, file)))
        .collect();

    debug!("resolved {} lint target(s) under {}", targets.len(), expr);
    targets
}

//! Per-invocation command assembly
//!
//! Targets and specs are created fresh for each run, live for one invocation,
//! and are discarded; nothing here is shared between invocations.

use std::ffi::OsString;
use std::path::PathBuf;

/// A path expression handed verbatim to one ESLint invocation: a directory,
/// a glob, or a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintTarget(pub String);

impl LintTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Invocation fields shared by every target of one run.
#[derive(Debug, Clone)]
pub struct InvocationTemplate {
    /// Resolved ESLint binary, located once per run
    pub executable: PathBuf,
    /// Forwarded as `-c` when present
    pub config_file: Option<PathBuf>,
    /// Forwarded as `--ignore-path` when present
    pub ignore_file: Option<PathBuf>,
}

impl InvocationTemplate {
    /// Materialize the concrete spec for one target.
    pub fn for_target(&self, target: &LintTarget) -> InvocationSpec {
        InvocationSpec {
            executable: self.executable.clone(),
            config_file: self.config_file.clone(),
            ignore_file: self.ignore_file.clone(),
            target: target.as_str().to_string(),
        }
    }
}

/// One fully-specified ESLint invocation.
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    pub executable: PathBuf,
    pub config_file: Option<PathBuf>,
    pub ignore_file: Option<PathBuf>,
    pub target: String,
}

impl InvocationSpec {
    /// Arguments in ESLint CLI order:
    /// `-f json [-c <config>] [--ignore-path <ignore>] <target>`
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-f".into(), "json".into()];
        if let Some(config) = &self.config_file {
            args.push("-c".into());
            args.push(config.clone().into_os_string());
        }
        if let Some(ignore) = &self.ignore_file {
            args.push("--ignore-path".into());
            args.push(ignore.clone().into_os_string());
        }
        args.push(self.target.clone().into());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_spec_produces_format_flag_and_target() {
        let spec = InvocationSpec {
            executable: PathBuf::from("/usr/bin/eslint"),
            config_file: None,
            ignore_file: None,
            target: "src/a.js".to_string(),
        };
        assert_eq!(spec.to_args(), vec!["-f", "json", "src/a.js"]);
    }

    #[test]
    fn overrides_appear_between_format_and_target() {
        let spec = InvocationSpec {
            executable: PathBuf::from("/usr/bin/eslint"),
            config_file: Some(PathBuf::from(".eslintrc.ci.json")),
            ignore_file: Some(PathBuf::from(".eslintignore.ci")),
            target: ".".to_string(),
        };
        assert_eq!(
            spec.to_args(),
            vec![
                "-f",
                "json",
                "-c",
                ".eslintrc.ci.json",
                "--ignore-path",
                ".eslintignore.ci",
                "."
            ]
        );
    }

    #[test]
    fn template_substitutes_only_the_target() {
        let template = InvocationTemplate {
            executable: PathBuf::from("/repo/node_modules/.bin/eslint"),
            config_file: Some(PathBuf::from(".eslintrc")),
            ignore_file: None,
        };
        let spec = template.for_target(&LintTarget("lib/b.js".to_string()));
        assert_eq!(spec.executable, template.executable);
        assert_eq!(spec.config_file, template.config_file);
        assert_eq!(spec.target, "lib/b.js");
    }
}

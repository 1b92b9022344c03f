//! Runner for the external `goal` command-line tool.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::constants::GOAL_TIMEOUT_SECS;
use crate::domain::ChainError;

/// Captured result of one `goal` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Standard output, untrimmed.
    pub stdout: String,
    /// Standard error, untrimmed.
    pub stderr: String,
    /// Spawn failure, non-zero exit or timeout.
    pub error: Option<String>,
}

impl RunOutput {
    /// Text for the output pane: trimmed stdout, or the error followed by
    /// trimmed stderr.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.error {
            None => self.stdout.trim().to_string(),
            Some(err) => {
                let stderr = self.stderr.trim();
                if stderr.is_empty() {
                    format!("error: {err}")
                } else {
                    format!("error: {err}\n{stderr}")
                }
            }
        }
    }
}

/// Invokes `goal` with a fixed set of base flags.
#[derive(Debug, Clone)]
pub struct GoalRunner {
    /// Binary name or path.
    pub binary: String,
    /// Node data directories, one `-d` each.
    pub data_dirs: Vec<String>,
    /// KMD directory (`-k`).
    pub kmd_dir: Option<String>,
    /// Wallet name (`-w`).
    pub wallet: Option<String>,
    /// Kill the process after this long.
    pub timeout: Duration,
}

impl Default for GoalRunner {
    fn default() -> Self {
        Self {
            binary: "goal".to_string(),
            data_dirs: Vec::new(),
            kmd_dir: None,
            wallet: None,
            timeout: Duration::from_secs(GOAL_TIMEOUT_SECS),
        }
    }
}

impl GoalRunner {
    /// `-d <dir>` per non-blank data dir, then `-k` and `-w` when set.
    #[must_use]
    pub fn base_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        for dir in self.data_dirs.iter().filter(|d| !d.trim().is_empty()) {
            flags.push("-d".to_string());
            flags.push(dir.clone());
        }
        if let Some(kmd) = self.kmd_dir.as_ref().filter(|k| !k.trim().is_empty()) {
            flags.push("-k".to_string());
            flags.push(kmd.clone());
        }
        if let Some(wallet) = self.wallet.as_ref().filter(|w| !w.trim().is_empty()) {
            flags.push("-w".to_string());
            flags.push(wallet.clone());
        }
        flags
    }

    /// Runs `goal <base flags> <argv>` and captures its output.
    ///
    /// Never fails: every failure is reported through [`RunOutput::error`].
    pub async fn run(&self, argv: &[String]) -> RunOutput {
        let mut args = self.base_flags();
        args.extend_from_slice(argv);
        debug!(binary = %self.binary, ?args, "running goal");

        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                warn!(binary = %self.binary, error = %e, "failed to start goal");
                return RunOutput {
                    error: Some(ChainError::Command(format!("{}: {e}", self.binary)).to_string()),
                    ..RunOutput::default()
                };
            }
        };

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => RunOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                error: (!output.status.success()).then(|| output.status.to_string()),
            },
            Ok(Err(e)) => RunOutput {
                error: Some(e.to_string()),
                ..RunOutput::default()
            },
            Err(_) => RunOutput {
                error: Some(format!(
                    "timed out after {}s",
                    self.timeout.as_secs()
                )),
                ..RunOutput::default()
            },
        }
    }

    /// Checks that the binary resolves, either as a path or on `PATH`.
    ///
    /// # Errors
    ///
    /// [`ChainError::Command`] when it cannot be found.
    pub fn check_binary(&self) -> Result<PathBuf, ChainError> {
        let binary = Path::new(&self.binary);
        if binary.components().count() > 1 {
            return binary
                .is_file()
                .then(|| binary.to_path_buf())
                .ok_or_else(|| ChainError::Command(format!("`{}` not found", self.binary)));
        }

        std::env::var_os("PATH")
            .and_then(|paths| {
                std::env::split_paths(&paths)
                    .map(|dir| dir.join(binary))
                    .find(|candidate| candidate.is_file())
            })
            .ok_or_else(|| ChainError::Command(format!("`{}` binary not found in PATH", self.binary)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_base_flags_skip_blank_values() {
        let runner = GoalRunner {
            data_dirs: strings(&["/data/a", " ", "/data/b"]),
            kmd_dir: Some(String::new()),
            wallet: Some("main".to_string()),
            ..GoalRunner::default()
        };
        assert_eq!(
            runner.base_flags(),
            strings(&["-d", "/data/a", "-d", "/data/b", "-w", "main"])
        );
        assert!(GoalRunner::default().base_flags().is_empty());
    }

    #[test]
    fn test_display_formats_errors() {
        let ok = RunOutput {
            stdout: "  done\n".to_string(),
            ..RunOutput::default()
        };
        assert_eq!(ok.display(), "done");

        let failed = RunOutput {
            stderr: "bad flag\n".to_string(),
            error: Some("exit status: 1".to_string()),
            ..RunOutput::default()
        };
        assert_eq!(failed.display(), "error: exit status: 1\nbad flag");
    }

    #[tokio::test]
    async fn test_missing_binary_reports_error() {
        let runner = GoalRunner {
            binary: "lazychain-definitely-missing-goal".to_string(),
            ..GoalRunner::default()
        };
        let output = runner.run(&strings(&["node", "status"])).await;
        assert!(output.error.is_some());
        assert!(runner.check_binary().is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_stdout_with_base_flags() {
        let runner = GoalRunner {
            binary: "echo".to_string(),
            wallet: Some("w1".to_string()),
            ..GoalRunner::default()
        };
        let output = runner.run(&strings(&["clerk", "send"])).await;
        assert_eq!(output.error, None);
        assert_eq!(output.stdout.trim(), "-w w1 clerk send");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_sets_error() {
        let runner = GoalRunner {
            binary: "false".to_string(),
            ..GoalRunner::default()
        };
        let output = runner.run(&[]).await;
        assert!(output.error.is_some());
    }
}

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{CommitId, VcsClient};

/// Git client that shells out to the `git` binary.
///
/// The call is synchronous and blocking with no timeout. Git's own
/// diagnostics go to the null device; an empty stdout means no commit.
pub struct GitClient {
    workdir: Option<PathBuf>,
}

impl GitClient {
    pub fn new() -> Self {
        Self { workdir: None }
    }

    /// Run git from `workdir` instead of the current directory
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsClient for GitClient {
    fn latest_commit_touching(&self, paths: &[PathBuf]) -> Option<CommitId> {
        if paths.is_empty() {
            return None;
        }

        let mut cmd = Command::new("git");
        cmd.args(["log", "-1", "--pretty=format:%h"])
            .args(paths)
            .stderr(Stdio::null());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("git invocation failed: {e}");
                return None;
            }
        };

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if id.is_empty() {
            tracing::debug!("git reported no commit for {} path(s)", paths.len());
            None
        } else {
            Some(CommitId::new(id))
        }
    }
}

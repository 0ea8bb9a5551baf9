//! Version control integration.
//!
//! The resolver layer only needs one question answered: which commit most
//! recently touched a given set of files? `VcsClient` is that seam, so tests
//! can swap the real `git` subprocess for a scripted double.

mod git;

pub use git::GitClient;

use std::fmt;
use std::path::PathBuf;

/// Short, opaque identifier of the most recent revision touching a file set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recognized version control systems
///
/// Only `Git` is supported; the others are recognized names so callers get a
/// clear error rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    Git,
    Mercurial,
    Subversion,
}

impl VcsKind {
    pub fn name(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Mercurial => "mercurial",
            VcsKind::Subversion => "subversion",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One-operation VCS capability used by the resolvers
pub trait VcsClient {
    /// Returns the id of the most recent commit touching any of `paths`, or
    /// `None` if the VCS reports nothing for them (untracked, nonexistent,
    /// or the invocation itself failed).
    fn latest_commit_touching(&self, paths: &[PathBuf]) -> Option<CommitId>;
}

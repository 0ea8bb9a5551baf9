use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{StampError, StampResult};
use crate::vcs::{CommitId, VcsClient, VcsKind};

/// Memoizing resolver for the most recent commit touching a set of files.
///
/// Successful lookups are cached for process lifetime under a key built by
/// joining the paths with a single space, in the given order. Absent results
/// are never cached, so every call for an unresolved set re-queries the VCS.
///
/// Known limitation: path names containing spaces collide in the joined key.
/// Paths are still passed to the VCS as separate arguments, so the collision
/// affects only cache identity.
pub struct CommitResolver {
    client: Box<dyn VcsClient>,
    cache: Mutex<HashMap<String, CommitId>>,
}

impl CommitResolver {
    pub fn new(client: Box<dyn VcsClient>) -> Self {
        Self {
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Latest commit touching any of `paths`, via the default VCS (git)
    pub fn latest_commit(&self, paths: &[PathBuf]) -> StampResult<Option<CommitId>> {
        self.latest_commit_with(paths, VcsKind::Git)
    }

    /// Latest commit touching any of `paths`, via an explicit VCS kind
    ///
    /// Fails immediately with `UnsupportedVcs` for anything but `Git`.
    pub fn latest_commit_with(
        &self,
        paths: &[PathBuf],
        vcs: VcsKind,
    ) -> StampResult<Option<CommitId>> {
        if vcs != VcsKind::Git {
            return Err(StampError::UnsupportedVcs(vcs));
        }

        let key = cache_key(paths);
        if let Some(id) = self.cache.lock().unwrap().get(&key) {
            tracing::debug!("commit cache hit for \"{key}\"");
            return Ok(Some(id.clone()));
        }

        // The lock is not held across the VCS call; concurrent misses may
        // each invoke the VCS, but only one success is ever stored.
        let resolved = self.client.latest_commit_touching(paths);
        if let Some(id) = &resolved {
            self.cache
                .lock()
                .unwrap()
                .entry(key)
                .or_insert_with(|| id.clone());
        }
        Ok(resolved)
    }
}

/// Cache key for a file set: the paths joined with a single space
fn cache_key(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

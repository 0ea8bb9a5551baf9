use crate::config::Config;
use crate::error::StampResult;
use crate::resolver::{AssetType, BundleResolver, CommitResolver};

/// Counts from one warmup pass
#[derive(Debug, Clone, Copy, Default)]
pub struct WarmupStats {
    /// Bundles visited
    pub bundles: usize,
    /// Individual files visited
    pub files: usize,
    /// Lookups that resolved to a commit (bundle-level and per-file)
    pub resolved: usize,
}

/// Eagerly populates both fingerprint caches at process start.
///
/// Runs only in configured pre-warm environments and is best-effort: files
/// or bundles the VCS knows nothing about are skipped, never fatal.
pub struct WarmupRunner<'a> {
    config: &'a Config,
    bundles: &'a BundleResolver<'a>,
    commits: &'a CommitResolver,
}

impl<'a> WarmupRunner<'a> {
    pub fn new(
        config: &'a Config,
        bundles: &'a BundleResolver<'a>,
        commits: &'a CommitResolver,
    ) -> Self {
        Self {
            config,
            bundles,
            commits,
        }
    }

    /// Resolve and cache fingerprints for every configured bundle and every
    /// file within them. A no-op outside the pre-warm environments.
    pub fn warm_all(&self, environment: &str) -> StampResult<WarmupStats> {
        let mut stats = WarmupStats::default();

        if !self.config.environment.is_prewarm(environment) {
            tracing::debug!("environment \"{environment}\" is not pre-warm, skipping warmup");
            return Ok(stats);
        }

        for ty in AssetType::ALL {
            let configured = self.config.bundles(ty);
            if configured.is_empty() {
                tracing::debug!("no {ty} bundles configured, skipping");
                continue;
            }

            for bundle in configured.keys() {
                stats.bundles += 1;

                if self.config.cache.enabled {
                    match self.bundles.latest_bundle_commit(bundle, ty)? {
                        Some(id) => {
                            stats.resolved += 1;
                            tracing::debug!("warmed {ty} bundle \"{bundle}\" at {id}");
                        }
                        None => {
                            tracing::warn!("no commit found for {ty} bundle \"{bundle}\"");
                        }
                    }
                }

                // Per-file entries are warmed separately from the bundle
                // entry; helpers that fingerprint single files hit these.
                for filepath in self.config.bundle_filepaths(bundle, ty) {
                    stats.files += 1;
                    if self.commits.latest_commit(&[filepath])?.is_some() {
                        stats.resolved += 1;
                    }
                }
            }
        }

        tracing::info!(
            "warmed {} bundle(s), {} file(s), {} resolved",
            stats.bundles,
            stats.files,
            stats.resolved
        );
        Ok(stats)
    }
}

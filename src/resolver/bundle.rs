use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::Config;
use crate::error::StampResult;
use crate::resolver::{AssetType, CommitResolver};
use crate::vcs::CommitId;

/// Memoizing resolver for bundle-level commit fingerprints.
///
/// Resolved commits are cached per `(type, bundle)` for process lifetime.
/// A bundle with no configured files resolves to `None` and caches nothing,
/// so later calls against richer configuration still resolve.
pub struct BundleResolver<'a> {
    config: &'a Config,
    commits: &'a CommitResolver,
    cache: Mutex<HashMap<AssetType, HashMap<String, CommitId>>>,
}

impl<'a> BundleResolver<'a> {
    pub fn new(config: &'a Config, commits: &'a CommitResolver) -> Self {
        // One empty map per recognized type up front.
        let mut cache = HashMap::new();
        for ty in AssetType::ALL {
            cache.insert(ty, HashMap::new());
        }
        Self {
            config,
            commits,
            cache: Mutex::new(cache),
        }
    }

    /// Latest commit touching any file of `bundle`, based on which of its
    /// files were most recently modified in the repository
    pub fn latest_bundle_commit(
        &self,
        bundle: &str,
        ty: AssetType,
    ) -> StampResult<Option<CommitId>> {
        {
            let cache = self.cache.lock().unwrap();
            if let Some(id) = cache.get(&ty).and_then(|m| m.get(bundle)) {
                tracing::debug!("bundle cache hit for {ty} \"{bundle}\"");
                return Ok(Some(id.clone()));
            }
        }

        let filepaths = self.config.bundle_filepaths(bundle, ty);
        if filepaths.is_empty() {
            return Ok(None);
        }

        let resolved = self.commits.latest_commit(&filepaths)?;
        if let Some(id) = &resolved {
            self.cache
                .lock()
                .unwrap()
                .entry(ty)
                .or_default()
                .entry(bundle.to_string())
                .or_insert_with(|| id.clone());
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::testing::ScriptedVcs;
    use std::path::PathBuf;
    use std::sync::atomic::Ordering;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.stylesheets.dir = Some(PathBuf::from("css"));
        config
            .stylesheets
            .bundles
            .insert("app".to_string(), vec!["a.css".to_string(), "b.css".to_string()]);
        config
    }

    #[test]
    fn test_bundle_commit_resolves_and_is_memoized() {
        let config = test_config();
        let vcs = ScriptedVcs::always(Some("abc123"));
        let calls = vcs.counter();
        let commits = CommitResolver::new(Box::new(vcs));
        let bundles = BundleResolver::new(&config, &commits);

        let first = bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap()
            .unwrap();
        assert_eq!(first.as_str(), "abc123");

        let second = bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap()
            .unwrap();
        assert_eq!(second.as_str(), "abc123");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_bundle_files_are_passed_in_configured_order() {
        let config = test_config();
        let vcs = ScriptedVcs::always(Some("abc123"));
        let calls = vcs.counter();
        let commits = CommitResolver::new(Box::new(vcs));
        let bundles = BundleResolver::new(&config, &commits);
        bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap();

        // The bundle resolved against "css/a.css css/b.css"; the same file
        // set in the same order is a commit-cache hit, so the VCS is not
        // invoked a second time.
        let resolved = commits
            .latest_commit(&[PathBuf::from("css/a.css"), PathBuf::from("css/b.css")])
            .unwrap()
            .unwrap();
        assert_eq!(resolved.as_str(), "abc123");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unconfigured_bundle_is_absent() {
        let config = test_config();
        let vcs = ScriptedVcs::always(Some("abc123"));
        let calls = vcs.counter();
        let commits = CommitResolver::new(Box::new(vcs));
        let bundles = BundleResolver::new(&config, &commits);

        let resolved = bundles
            .latest_bundle_commit("missing", AssetType::Stylesheet)
            .unwrap();
        assert_eq!(resolved, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_file_list_does_not_poison_the_cache() {
        let mut config = test_config();
        config
            .stylesheets
            .bundles
            .insert("empty".to_string(), Vec::new());
        let vcs = ScriptedVcs::always(Some("abc123"));
        let calls = vcs.counter();
        let commits = CommitResolver::new(Box::new(vcs));
        let bundles = BundleResolver::new(&config, &commits);

        assert_eq!(
            bundles
                .latest_bundle_commit("empty", AssetType::Stylesheet)
                .unwrap(),
            None
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // A populated bundle still resolves through the same resolver.
        let resolved = bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.as_str(), "abc123");
    }

    #[test]
    fn test_absent_bundle_result_is_retried_then_cached() {
        let config = test_config();
        let vcs = ScriptedVcs::script(vec![None], Some("abc123"));
        let calls = vcs.counter();
        let commits = CommitResolver::new(Box::new(vcs));
        let bundles = BundleResolver::new(&config, &commits);

        assert_eq!(
            bundles
                .latest_bundle_commit("app", AssetType::Stylesheet)
                .unwrap(),
            None
        );
        let resolved = bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.as_str(), "abc123");

        bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_types_are_cached_independently() {
        let mut config = test_config();
        config.scripts.dir = Some(PathBuf::from("js"));
        config
            .scripts
            .bundles
            .insert("app".to_string(), vec!["a.js".to_string()]);
        let vcs = ScriptedVcs::script(vec![Some("abc123"), Some("def456")], None);
        let commits = CommitResolver::new(Box::new(vcs));
        let bundles = BundleResolver::new(&config, &commits);

        let css = bundles
            .latest_bundle_commit("app", AssetType::Stylesheet)
            .unwrap()
            .unwrap();
        let js = bundles
            .latest_bundle_commit("app", AssetType::Script)
            .unwrap()
            .unwrap();
        assert_eq!(css.as_str(), "abc123");
        assert_eq!(js.as_str(), "def456");
    }
}

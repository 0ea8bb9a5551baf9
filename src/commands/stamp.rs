use anyhow::Result;
use console::style;

use crate::cli::StampOptions;
use crate::config::resolve_config;
use crate::resolver::{AssetType, BundleResolver, CommitResolver};
use crate::vcs::GitClient;

pub fn run(bundle: String, options: StampOptions) -> Result<()> {
    let asset_type = AssetType::from_name(&options.asset_type)?;
    let config = resolve_config(options.config.as_deref())?;

    let commits = CommitResolver::new(Box::new(GitClient::new()));
    let bundles = BundleResolver::new(&config, &commits);

    match bundles.latest_bundle_commit(&bundle, asset_type)? {
        Some(id) => {
            tracing::debug!("{asset_type} bundle \"{bundle}\" resolved to {id}");
            println!("{id}");
            Ok(())
        }
        None => anyhow::bail!(
            "no commit found for {} bundle \"{}\"; is it configured and tracked in git?",
            style(asset_type).cyan(),
            style(&bundle).cyan()
        ),
    }
}

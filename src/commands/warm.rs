use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::WarmOptions;
use crate::config::resolve_config;
use crate::resolver::{BundleResolver, CommitResolver, WarmupRunner};
use crate::vcs::GitClient;

pub fn run(options: WarmOptions) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;

    if !config.environment.is_prewarm(&options.env) {
        println!(
            "{} Environment {} is not in the pre-warm set; nothing to do",
            style("!").yellow().bold(),
            style(&options.env).cyan()
        );
        return Ok(());
    }

    let commits = CommitResolver::new(Box::new(GitClient::new()));
    let bundles = BundleResolver::new(&config, &commits);
    let runner = WarmupRunner::new(&config, &bundles, &commits);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Resolving bundle fingerprints...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let stats = runner.warm_all(&options.env)?;
    pb.finish_and_clear();

    println!(
        "{} Warmed {} bundle(s): {} file(s) visited, {} lookup(s) resolved",
        style("✓").green().bold(),
        style(stats.bundles).cyan(),
        stats.files,
        stats.resolved
    );

    if stats.bundles == 0 {
        println!(
            "  {}",
            style("No bundles configured; run `asset-stamp init` to create a config").yellow()
        );
    }

    Ok(())
}

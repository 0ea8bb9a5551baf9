use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "asset-stamp",
    author = "esengine",
    version,
    about = "Git-based cache-busting fingerprints for static asset bundles",
    long_about = "Asset Stamp - cache-busting fingerprints for asset bundles.\n\n\
                  Resolves the most recent git commit touching any file in a configured\n\
                  bundle of stylesheets or scripts, and memoizes the answer so repeated\n\
                  lookups never hit git twice."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new asset-stamp.toml configuration file
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Print the latest commit fingerprint for a configured bundle
    Stamp {
        /// Bundle name, as configured in asset-stamp.toml
        bundle: String,

        #[command(flatten)]
        options: StampOptions,
    },

    /// Pre-populate fingerprint caches for every configured bundle
    Warm {
        #[command(flatten)]
        options: WarmOptions,
    },
}

#[derive(Args)]
pub struct StampOptions {
    /// Asset type of the bundle (stylesheet/css or script/js)
    #[arg(short = 't', long = "type")]
    pub asset_type: String,

    /// Configuration file path (defaults to searching parent directories)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct WarmOptions {
    /// Deployment environment name
    #[arg(long, env = "ASSET_STAMP_ENV", default_value = "development")]
    pub env: String,

    /// Configuration file path (defaults to searching parent directories)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

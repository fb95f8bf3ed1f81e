//! CLI argument definitions using clap.
//!
//! The auditor runs with no required arguments: defaults compare the `en`
//! and `he` bundles under `src/locales`. Every flag overrides a field of
//! the optional `.keyauditrc.json` config file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Locales directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Reference locale to compare against (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Target locale to audit (overrides config file)
    #[arg(long)]
    pub target_locale: Option<String>,

    /// List every differing key instead of the first 20
    #[arg(short, long)]
    pub verbose: bool,
}

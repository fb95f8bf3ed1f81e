//! The audit run: load configuration, load bundles, compare, print.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::audit::{LocaleBundle, NamespaceAudit};
use crate::config::{Config, load_config};
use crate::report::print_report;

/// Run the audit with the given arguments.
///
/// All documents are loaded before anything is printed, so a missing or
/// malformed file aborts without a partial report. Key differences do
/// not affect the exit status; only load and config failures do.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let mut config = load_config(&cwd)?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    let locales_root = PathBuf::from(&config.locales_root);

    let mut audits = Vec::with_capacity(config.namespaces.len());
    for namespace in &config.namespaces {
        let reference = LocaleBundle::load(&locales_root, &config.reference_locale, namespace)?;
        let target = LocaleBundle::load(&locales_root, &config.target_locale, namespace)?;
        audits.push(NamespaceAudit::new(reference, target));
    }

    print_report(&audits, args.verbose);

    Ok(ExitStatus::Success)
}

fn apply_overrides(config: &mut Config, args: &Arguments) {
    if let Some(root) = &args.locales_root {
        config.locales_root = root.to_string_lossy().to_string();
    }
    if let Some(locale) = &args.reference_locale {
        config.reference_locale = locale.clone();
    }
    if let Some(locale) = &args.target_locale {
        config.target_locale = locale.clone();
    }
}

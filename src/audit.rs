//! Set comparison between reference and target locale bundles.
//!
//! A bundle is one locale's JSON document for one namespace, flattened
//! into its leaf-key paths. An audit pairs the reference bundle with the
//! target bundle and derives the missing/extra key sets:
//!
//! - `missing`: keys the reference locale has and the target lacks
//! - `extra`: keys the target locale has and the reference lacks

use std::{collections::BTreeSet, path::Path};

use anyhow::{Context, Result};

use crate::parsers::json::{count_leaves, leaf_key_paths, parse_json_file};

/// One loaded locale document: its identity plus the flattened key set.
#[derive(Debug)]
pub struct LocaleBundle {
    pub locale: String,
    pub namespace: String,
    pub leaf_count: usize,
    pub keys: BTreeSet<String>,
}

impl LocaleBundle {
    /// Load `<locales_root>/<locale>/<namespace>.json` and flatten it.
    pub fn load(locales_root: &Path, locale: &str, namespace: &str) -> Result<Self> {
        let path = locales_root.join(locale).join(format!("{}.json", namespace));
        let document = parse_json_file(&path).with_context(|| {
            format!(
                "Failed to load '{}' translations for locale '{}'",
                namespace, locale
            )
        })?;

        Ok(Self {
            locale: locale.to_string(),
            namespace: namespace.to_string(),
            leaf_count: count_leaves(&document),
            keys: leaf_key_paths(&document),
        })
    }
}

/// Comparison of one namespace across the two locales.
#[derive(Debug)]
pub struct NamespaceAudit {
    pub reference: LocaleBundle,
    pub target: LocaleBundle,
    /// Keys present in the reference locale but absent from the target.
    pub missing: BTreeSet<String>,
    /// Keys present in the target locale but absent from the reference.
    pub extra: BTreeSet<String>,
}

impl NamespaceAudit {
    pub fn new(reference: LocaleBundle, target: LocaleBundle) -> Self {
        let missing = reference.keys.difference(&target.keys).cloned().collect();
        let extra = target.keys.difference(&reference.keys).cloned().collect();

        Self {
            reference,
            target,
            missing,
            extra,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.reference.namespace
    }
}

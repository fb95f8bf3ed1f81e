use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".keyauditrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
}

fn default_locales_root() -> String {
    "src/locales".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_target_locale() -> String {
    "he".to_string()
}

fn default_namespaces() -> Vec<String> {
    vec!["common".to_string(), "trail".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            reference_locale: default_reference_locale(),
            target_locale: default_target_locale(),
            namespaces: default_namespaces(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Called after CLI overrides are applied, so flag values are
    /// checked too.
    pub fn validate(&self) -> Result<()> {
        if self.namespaces.is_empty() {
            bail!("'namespaces' must list at least one namespace");
        }

        if self.reference_locale == self.target_locale {
            bail!(
                "'referenceLocale' and 'targetLocale' must differ (both are \"{}\")",
                self.reference_locale
            );
        }

        Ok(())
    }
}

/// Load configuration from `.keyauditrc.json` in `dir`.
///
/// A missing config file is not an error; defaults compare the `en` and
/// `he` bundles of the `common` and `trail` namespaces under
/// `src/locales`.
pub fn load_config(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    Ok(config)
}

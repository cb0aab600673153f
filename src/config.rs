use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{MarkerAttributes, Slot},
    localizer::DEFAULT_LANGUAGE,
    resolve::FALLBACK_LANGUAGE,
};

pub const CONFIG_FILE_NAME: &str = ".i18nbindrc.json";

/// `en`, `ko`, `en-US`, `zh-Hant-TW`, ...
static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").expect("language code pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog file. The embedded demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
    #[serde(default = "default_query_parameter")]
    pub query_parameter: String,
    /// Languages accepted from the query string.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Language used when the query string names no accepted language.
    #[serde(default = "default_query_default")]
    pub query_default: String,
    #[serde(default = "default_text_attribute")]
    pub text_attribute: String,
    #[serde(default = "default_placeholder_attribute")]
    pub placeholder_attribute: String,
    #[serde(default = "default_value_attribute")]
    pub value_attribute: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_fallback_language() -> String {
    FALLBACK_LANGUAGE.to_string()
}

fn default_query_parameter() -> String {
    "hl".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "ko"].map(String::from).to_vec()
}

fn default_query_default() -> String {
    "ko".to_string()
}

fn default_text_attribute() -> String {
    Slot::Text.default_marker().to_string()
}

fn default_placeholder_attribute() -> String {
    Slot::Placeholder.default_marker().to_string()
}

fn default_value_attribute() -> String {
    Slot::Value.default_marker().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            default_language: default_language(),
            fallback_language: default_fallback_language(),
            query_parameter: default_query_parameter(),
            languages: default_languages(),
            query_default: default_query_default(),
            text_attribute: default_text_attribute(),
            placeholder_attribute: default_placeholder_attribute(),
            value_attribute: default_value_attribute(),
        }
    }
}

pub fn is_valid_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

impl Config {
    /// Validate configuration values.
    ///
    /// Language codes must look like BCP 47 tags, `queryDefault` must be one
    /// of `languages`, and the three marker attributes must be non-empty and
    /// distinct.
    pub fn validate(&self) -> Result<()> {
        for (field, code) in [
            ("defaultLanguage", &self.default_language),
            ("fallbackLanguage", &self.fallback_language),
            ("queryDefault", &self.query_default),
        ] {
            if !is_valid_language_code(code) {
                bail!("Invalid language code in '{}': \"{}\"", field, code);
            }
        }

        for code in &self.languages {
            if !is_valid_language_code(code) {
                bail!("Invalid language code in 'languages': \"{}\"", code);
            }
        }

        if !self.languages.contains(&self.query_default) {
            bail!(
                "'queryDefault' \"{}\" is not listed in 'languages'.",
                self.query_default
            );
        }

        if self.query_parameter.is_empty() {
            bail!("'queryParameter' must not be empty.");
        }

        let markers = [
            ("textAttribute", &self.text_attribute),
            ("placeholderAttribute", &self.placeholder_attribute),
            ("valueAttribute", &self.value_attribute),
        ];
        let mut seen = HashSet::new();
        for (field, attribute) in markers {
            if attribute.trim().is_empty() {
                bail!("'{}' must not be empty.", field);
            }
            if !seen.insert(attribute.as_str()) {
                bail!("'{}' duplicates another marker attribute: \"{}\"", field, attribute);
            }
        }

        Ok(())
    }

    pub fn markers(&self) -> MarkerAttributes {
        MarkerAttributes {
            text: self.text_attribute.clone(),
            placeholder: self.placeholder_attribute.clone(),
            value: self.value_attribute.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Resolve the configured catalog path against the config file location.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let catalog = Path::new(self.config.catalog.as_deref()?);
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) if catalog.is_relative() => Some(dir.join(catalog)),
            _ => Some(catalog.to_path_buf()),
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::{CommonArgs, LanguageArgs};
use crate::{
    catalog::Catalog,
    config::{Config, load_config},
    query::language_from_query,
};

/// Config and catalog shared by the catalog commands.
pub struct CommandContext {
    pub config: Config,
    pub catalog: Catalog,
    /// Catalog file, `None` for the embedded demo catalog.
    pub catalog_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load config from the working directory, then the catalog.
    ///
    /// `--catalog` wins over the config file; with neither, the embedded
    /// demo catalog is used.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine working directory")?;
        let loaded = load_config(&cwd)?;
        let catalog_path = common.catalog.clone().or_else(|| loaded.catalog_path());

        let catalog = match &catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::demo()?,
        };
        tracing::debug!(
            catalog = %catalog_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<demo>".to_string()),
            config_file = loaded.from_file(),
            "loaded catalog"
        );

        Ok(Self {
            config: loaded.config,
            catalog,
            catalog_path,
        })
    }

    /// Pick the active language: `--lang`, then `--query`, then the config
    /// default.
    pub fn language(&self, args: &LanguageArgs) -> String {
        if let Some(lang) = args.lang.as_deref().filter(|l| !l.is_empty()) {
            return lang.to_string();
        }
        match &args.query {
            Some(query) => language_from_query(
                query,
                &self.config.query_parameter,
                &self.config.languages,
                &self.config.query_default,
            ),
            None => self.config.default_language.clone(),
        }
    }
}

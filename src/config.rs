//! Configuration management module
//!
//! Two layers:
//!
//! - [`DeckConfig`] is the resolved runtime configuration: command-line flags
//!   first, then the `SLIDEDECK_*` environment variables, then defaults.
//! - [`DeckSettings`] is the optional JSON settings file carrying the reduced
//!   range and the asset table. Its defaults reproduce the shipped deck.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{AssetResolver, AssetTable};
use crate::catalog::SlideCatalog;
use crate::cli::Cli;
use crate::deck::{ReducedRange, SlideSetBuilder};

/// Enables the full slide set when set to exactly `"true"`
pub const ENV_INCLUDE_ALL: &str = "SLIDEDECK_INCLUDE_ALL";

/// Root directory for asset paths
pub const ENV_ASSET_DIR: &str = "SLIDEDECK_ASSET_DIR";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Startup value of the inclusion flag
    pub include_all: bool,
    /// Whether the full/reduced toggle is offered
    pub toggle_enabled: bool,
    pub asset_root: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            include_all: false,
            toggle_enabled: false,
            asset_root: PathBuf::from("."),
            catalog_path: None,
            settings_path: None,
            log_file: None,
        }
    }
}

impl DeckConfig {
    /// Resolve against the process environment
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve<F>(cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let include_all = if cli.full {
            true
        } else if cli.reduced {
            false
        } else {
            env(ENV_INCLUDE_ALL).as_deref() == Some("true")
        };

        let asset_root = cli
            .assets
            .clone()
            .or_else(|| env(ENV_ASSET_DIR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            include_all,
            toggle_enabled: include_all || cli.allow_toggle,
            asset_root,
            catalog_path: cli.catalog.clone(),
            settings_path: cli.settings.clone(),
            log_file: cli.log_file.clone(),
        }
    }

    /// The configured catalog, or the built-in deck
    pub fn load_catalog(&self) -> Result<SlideCatalog> {
        match &self.catalog_path {
            Some(path) => SlideCatalog::load_from_file(path),
            None => SlideCatalog::builtin(),
        }
    }

    /// The configured settings file, or defaults
    pub fn load_settings(&self) -> Result<DeckSettings> {
        match &self.settings_path {
            Some(path) => DeckSettings::load_from_file(path),
            None => Ok(DeckSettings::default()),
        }
    }
}

/// Deck settings that can be saved/loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckSettings {
    pub reduced_range: ReducedRange,
    pub assets: AssetTable,
}

impl DeckSettings {
    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings JSON in {:?}", path.as_ref()))?;

        if settings.reduced_range.start > settings.reduced_range.end {
            anyhow::bail!(
                "Reduced range {}..={} in {:?} is empty",
                settings.reduced_range.start,
                settings.reduced_range.end,
                path.as_ref()
            );
        }

        Ok(settings)
    }

    /// Slide-set builder wired with these settings
    pub fn builder(&self) -> SlideSetBuilder {
        SlideSetBuilder::new(AssetResolver::new(self.assets.clone()), self.reduced_range)
    }
}

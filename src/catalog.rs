//! Slide catalog loading and validation
//!
//! The catalog is the authored, ordered list of slide records. It is read once
//! (from a JSON file or the built-in deck) and never mutated; every active
//! slide sequence is derived from it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::DeckError;
use crate::types::{ChartPoint, LayoutType};

/// Delimiter between a module's short name and the rest of its title
pub const MODULE_DELIMITER: char = '：';

/// The deck shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../data/slides.json");

/// One authored slide as it appears in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSlideRecord {
    pub id: u32,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub layout_type: LayoutType,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub data_support: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartPoint>>,
}

impl RawSlideRecord {
    /// Minimal record, mostly useful for building catalogs in code
    pub fn new(id: u32, module: &str, title: &str, layout_type: LayoutType) -> Self {
        Self {
            id,
            module: module.to_string(),
            title: title.to_string(),
            layout_type,
            content: Vec::new(),
            data_support: String::new(),
            image: None,
            video: None,
            chart_data: None,
        }
    }
}

/// Text before the module delimiter, or the whole string if there is none
pub fn module_short_name(module: &str) -> &str {
    module
        .split_once(MODULE_DELIMITER)
        .map_or(module, |(short, _)| short)
}

/// Ordered, immutable set of slide records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideCatalog {
    records: Vec<RawSlideRecord>,
}

impl SlideCatalog {
    /// Wrap an already ordered list of records
    pub fn new(records: Vec<RawSlideRecord>) -> Self {
        Self { records }
    }

    /// The deck compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG).context("Built-in catalog is corrupt")
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<RawSlideRecord> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Ok(Self { records })
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Invalid catalog in {:?}", path.as_ref()))
    }

    /// Save the catalog as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    pub fn records(&self) -> &[RawSlideRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect every structural problem in the catalog.
    ///
    /// Records that would otherwise render with blank module or title text are
    /// rejected here, before they reach the slide-set builder.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (position, record) in self.records.iter().enumerate() {
            let at = format!("record #{} (id {})", position + 1, record.id);
            if record.id == 0 {
                issues.push(format!("{}: id must be a positive integer", at));
            }
            if !seen.insert(record.id) {
                issues.push(format!("{}: duplicate id", at));
            }
            if record.module.trim().is_empty() {
                issues.push(format!("{}: missing module", at));
            }
            if record.title.trim().is_empty() {
                issues.push(format!("{}: missing title", at));
            }
        }

        issues
    }

    /// Validate the catalog, failing with every issue found
    pub fn validate(&self) -> crate::error::Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(DeckError::Validation(issues))
        }
    }
}

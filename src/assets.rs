//! Asset resolution
//!
//! Maps a catalog record to the visual asset(s) drawn for it. The rules are
//! data, not branching: an [`AssetTable`] lists document pages, the legacy
//! id lookup, and two-image pairings, and can be replaced from a settings
//! file without touching code.
//!
//! # Resolution Order
//!
//! 1. Explicit `image` on the record, verbatim
//! 2. Document page by position (`id - first_id`) when `id` falls in the page range
//! 3. Legacy id lookup (`id >= threshold ? id - high_offset : id - low_offset`)
//! 4. Generic cover asset
//!
//! Pairings are applied on top, keyed by the catalog id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::RawSlideRecord;

/// Reference to a visual asset, relative to the asset root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as a compact label in the UI
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Positionally indexed document-page assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPages {
    /// Catalog id of the first page
    pub first_id: u32,
    /// Page assets in order; page `n` belongs to catalog id `first_id + n`
    pub pages: Vec<AssetRef>,
}

impl DocumentPages {
    /// Page asset for a catalog id, if the id is a document page
    pub fn page_for(&self, id: u32) -> Option<&AssetRef> {
        let offset = id.checked_sub(self.first_id)?;
        self.pages.get(offset as usize)
    }
}

/// Rule that turns a catalog id into the id used by the legacy lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyIdRule {
    pub threshold: u32,
    pub high_offset: u32,
    pub low_offset: u32,
}

impl Default for LegacyIdRule {
    fn default() -> Self {
        Self {
            threshold: 18,
            high_offset: 11,
            low_offset: 1,
        }
    }
}

impl LegacyIdRule {
    /// Legacy id for a catalog id; `None` when the subtraction would underflow
    pub fn legacy_id(&self, id: u32) -> Option<u32> {
        if id >= self.threshold {
            id.checked_sub(self.high_offset)
        } else {
            id.checked_sub(self.low_offset)
        }
    }
}

/// Complete, data-driven asset mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTable {
    /// Generic fallback asset
    pub cover: AssetRef,
    pub document_pages: DocumentPages,
    #[serde(default)]
    pub legacy_rule: LegacyIdRule,
    /// Legacy id → default asset
    pub legacy: BTreeMap<u32, AssetRef>,
    /// Catalog id → two-image layout
    #[serde(default)]
    pub pairs: BTreeMap<u32, [AssetRef; 2]>,
}

impl Default for AssetTable {
    fn default() -> Self {
        let a = |name: &str| AssetRef::new(format!("assets/{}.webp", name));

        let pages = (1..=14).map(|n| a(&format!("pdf_page_{:02}", n))).collect();

        let legacy = [
            (1, "candy_cover"),
            (2, "candy_rocket"),
            (7, "zhangji_lecture"),
            (8, "lecture_hall"),
            (9, "candy_laptop"),
            (10, "monet"),
            (11, "candy_brain"),
            (12, "candy_data"),
            (13, "gemini"),
            (14, "candy_data"),
            (15, "coding"),
            (16, "candy_rocket"),
            (17, "candy_brain"),
            (18, "candy_laptop"),
            (19, "coding2"),
            (20, "candy_cover"),
            (21, "liziqi"),
            (22, "meituan"),
            (23, "xiaomi"),
            (24, "candy_cover"),
            (25, "candy_laptop"),
            (26, "candy_rocket"),
            (27, "candy_laptop"),
            (28, "candy_brain"),
            (29, "candy_data"),
            (30, "coding2"),
            (31, "candy_brain"),
            (32, "candy_rocket"),
            (33, "liziqi"),
        ]
        .into_iter()
        .map(|(id, name)| (id, a(name)))
        .collect();

        let pairs = [
            (18, [a("slide18_top"), a("slide18_bottom")]),
            (19, [a("lecture_hall"), a("lecture_closeup")]),
            (33, [a("liziqi"), a("liziqi")]),
        ]
        .into_iter()
        .collect();

        Self {
            cover: a("candy_cover"),
            document_pages: DocumentPages {
                first_id: 4,
                pages,
            },
            legacy_rule: LegacyIdRule::default(),
            legacy,
            pairs,
        }
    }
}

/// Assets resolved for one slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssets {
    /// Single asset, always present
    pub image: AssetRef,
    /// Two-image layout, drawn instead of `image` when present
    pub images: Option<[AssetRef; 2]>,
}

impl ResolvedAssets {
    /// Assets that are actually drawn, without duplicates
    pub fn displayed(&self) -> Vec<AssetRef> {
        match &self.images {
            Some([first, second]) if first == second => vec![first.clone()],
            Some([first, second]) => vec![first.clone(), second.clone()],
            None => vec![self.image.clone()],
        }
    }
}

/// Resolves records to assets using an [`AssetTable`]
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    table: AssetTable,
}

impl AssetResolver {
    pub fn new(table: AssetTable) -> Self {
        Self { table }
    }

    /// Resolve a record's assets. Never fails; the cover asset is the floor.
    pub fn resolve(&self, record: &RawSlideRecord) -> ResolvedAssets {
        let image = match record.image.as_deref() {
            Some(explicit) if !explicit.is_empty() => AssetRef::new(explicit),
            _ => self.implicit_asset(record.id),
        };

        let images = self.table.pairs.get(&record.id).cloned();

        ResolvedAssets { image, images }
    }

    fn implicit_asset(&self, id: u32) -> AssetRef {
        if let Some(page) = self.table.document_pages.page_for(id) {
            return page.clone();
        }

        self.table
            .legacy_rule
            .legacy_id(id)
            .and_then(|legacy| self.table.legacy.get(&legacy))
            .unwrap_or(&self.table.cover)
            .clone()
    }
}

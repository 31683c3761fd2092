//! Slide-set construction
//!
//! Turns the catalog into the active sequence: filter by the inclusion flag,
//! keep relative order, re-index `1..N`, resolve assets against the original
//! record, and flag module starts against the previous *surviving* record.
//!
//! The builder is pure. The active sequence is regenerated wholesale on
//! every inclusion-flag change; nothing is patched in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::{AssetRef, AssetResolver, ResolvedAssets};
use crate::catalog::{RawSlideRecord, module_short_name};
use crate::types::{ChartPoint, LayoutType};

/// Inclusive range of catalog ids left out of the reduced slide set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedRange {
    pub start: u32,
    pub end: u32,
}

impl Default for ReducedRange {
    fn default() -> Self {
        Self { start: 5, end: 17 }
    }
}

impl ReducedRange {
    pub fn contains(&self, id: u32) -> bool {
        (self.start..=self.end).contains(&id)
    }
}

/// A slide in the active sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSlide {
    /// 1-based position in the active sequence
    pub id: u32,
    /// Id of the catalog record this slide came from
    pub source_id: u32,
    pub module: String,
    pub title: String,
    pub layout_type: LayoutType,
    pub content: Vec<String>,
    pub data_support: String,
    pub image: AssetRef,
    pub images: Option<[AssetRef; 2]>,
    pub video: Option<String>,
    pub chart_data: Option<Vec<ChartPoint>>,
    /// True when the module differs from the previous active slide's
    pub is_module_start: bool,
}

impl ActiveSlide {
    fn from_record(
        record: &RawSlideRecord,
        id: u32,
        assets: ResolvedAssets,
        is_module_start: bool,
    ) -> Self {
        Self {
            id,
            source_id: record.id,
            module: record.module.clone(),
            title: record.title.clone(),
            layout_type: record.layout_type,
            content: record.content.clone(),
            data_support: record.data_support.clone(),
            image: assets.image,
            images: assets.images,
            video: record.video.clone(),
            chart_data: record.chart_data.clone(),
            is_module_start,
        }
    }

    /// Module name before the delimiter
    pub fn module_short_name(&self) -> &str {
        module_short_name(&self.module)
    }

    /// Assets the renderer draws for this slide
    pub fn displayed_assets(&self) -> Vec<AssetRef> {
        ResolvedAssets {
            image: self.image.clone(),
            images: self.images.clone(),
        }
        .displayed()
    }
}

/// Builds active sequences from a catalog
#[derive(Debug, Clone, Default)]
pub struct SlideSetBuilder {
    resolver: AssetResolver,
    reduced_range: ReducedRange,
}

impl SlideSetBuilder {
    pub fn new(resolver: AssetResolver, reduced_range: ReducedRange) -> Self {
        Self {
            resolver,
            reduced_range,
        }
    }

    pub fn reduced_range(&self) -> ReducedRange {
        self.reduced_range
    }

    /// Whether a catalog record survives the filter
    pub fn includes(&self, record: &RawSlideRecord, include_all: bool) -> bool {
        include_all || !self.reduced_range.contains(record.id)
    }

    /// Build the active sequence.
    ///
    /// An empty result is valid; consumers treat `N = 0` as a degenerate
    /// state rather than an error.
    pub fn build(&self, catalog: &[RawSlideRecord], include_all: bool) -> Vec<ActiveSlide> {
        let mut active: Vec<ActiveSlide> = Vec::with_capacity(catalog.len());
        let mut previous_module: Option<&str> = None;

        for record in catalog.iter().filter(|r| self.includes(r, include_all)) {
            let is_module_start = previous_module != Some(record.module.as_str());
            let id = active.len() as u32 + 1;
            let assets = self.resolver.resolve(record);

            active.push(ActiveSlide::from_record(record, id, assets, is_module_start));
            previous_module = Some(record.module.as_str());
        }

        debug!(
            "Built active sequence: {} of {} records (include_all={})",
            active.len(),
            catalog.len(),
            include_all
        );

        active
    }
}

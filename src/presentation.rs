//! Presentation core
//!
//! Ties the catalog, slide-set builder, module index and navigation
//! controller together. A change of the inclusion flag rebuilds the active
//! sequence wholesale, re-derives the modules and resizes navigation in one
//! call, so callers never observe a half-updated deck.

use tracing::info;

use crate::catalog::SlideCatalog;
use crate::deck::{ActiveSlide, ReducedRange, SlideSetBuilder};
use crate::module_index::{Module, ModuleIndex};
use crate::navigation::{Direction, NavigationController};

/// The deck being presented
#[derive(Debug, Clone)]
pub struct Presentation {
    catalog: SlideCatalog,
    builder: SlideSetBuilder,
    include_all: bool,
    active: Vec<ActiveSlide>,
    modules: ModuleIndex,
    navigation: NavigationController,
    generation: u64,
}

impl Presentation {
    pub fn new(catalog: SlideCatalog, builder: SlideSetBuilder, include_all: bool) -> Self {
        let active = builder.build(catalog.records(), include_all);
        let modules = ModuleIndex::derive(&active);
        let navigation = NavigationController::new(active.len());

        info!(
            "Presentation ready: {} slides, {} modules (include_all={})",
            active.len(),
            modules.len(),
            include_all
        );

        Self {
            catalog,
            builder,
            include_all,
            active,
            modules,
            navigation,
            generation: 0,
        }
    }

    pub fn include_all(&self) -> bool {
        self.include_all
    }

    /// Switch between the full and reduced slide sets.
    ///
    /// Returns whether the active sequence was rebuilt.
    pub fn set_include_all(&mut self, include_all: bool) -> bool {
        if include_all == self.include_all {
            return false;
        }

        self.include_all = include_all;
        self.active = self.builder.build(self.catalog.records(), include_all);
        self.modules = ModuleIndex::derive(&self.active);
        let reset = self.navigation.resize(self.active.len());
        self.generation += 1;

        info!(
            "Slide set switched to {}: {} slides{}",
            if include_all { "full" } else { "reduced" },
            self.active.len(),
            if reset { ", position reset to start" } else { "" }
        );
        true
    }

    /// Flip the inclusion flag
    pub fn toggle_slide_set(&mut self) -> bool {
        self.set_include_all(!self.include_all)
    }

    /// Bumped on every rebuild of the active sequence
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn slides(&self) -> &[ActiveSlide] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn modules(&self) -> &ModuleIndex {
        &self.modules
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    pub fn direction(&self) -> Direction {
        self.navigation.direction()
    }

    /// Slide at the current position; `None` only for an empty deck
    pub fn current_slide(&self) -> Option<&ActiveSlide> {
        self.active.get(self.navigation.current_index())
    }

    pub fn current_module(&self) -> Option<&Module> {
        self.modules.current(self.navigation.current_index())
    }

    pub fn next(&mut self) -> bool {
        self.navigation.next()
    }

    pub fn prev(&mut self) -> bool {
        self.navigation.prev()
    }

    pub fn jump(&mut self, index: usize) -> bool {
        self.navigation.jump(index)
    }

    /// Jump to the anchor of the module with the given rank
    pub fn jump_to_module(&mut self, rank: usize) -> bool {
        match self.modules.get(rank) {
            Some(module) => self.navigation.jump(module.start_index),
            None => false,
        }
    }

    /// Fraction of the deck shown so far, from the current slide's display id
    pub fn progress_ratio(&self) -> f64 {
        match self.current_slide() {
            Some(slide) => f64::from(slide.id) / self.active.len() as f64,
            None => 0.0,
        }
    }

    /// Catalog ids left out of the reduced slide set
    pub fn reduced_range(&self) -> ReducedRange {
        self.builder.reduced_range()
    }

    /// Whether any record from the reduced range is in the active sequence
    pub fn includes_reduced_range(&self) -> bool {
        let range = self.builder.reduced_range();
        self.active.iter().any(|s| range.contains(s.source_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawSlideRecord;
    use crate::types::LayoutType;

    fn catalog(n: u32) -> SlideCatalog {
        SlideCatalog::new(
            (1..=n)
                .map(|id| {
                    let module = format!("M{}：m", (id - 1) / 5);
                    RawSlideRecord::new(id, &module, "T", LayoutType::Standard)
                })
                .collect(),
        )
    }

    #[test]
    fn test_new_starts_at_first_slide() {
        let p = Presentation::new(catalog(43), SlideSetBuilder::default(), false);
        assert_eq!(p.len(), 30);
        assert_eq!(p.current_index(), 0);
        assert_eq!(p.current_slide().map(|s| s.id), Some(1));
        assert_eq!(p.generation(), 0);
    }

    #[test]
    fn test_toggle_rebuilds_and_bumps_generation() {
        let mut p = Presentation::new(catalog(43), SlideSetBuilder::default(), false);
        assert!(p.toggle_slide_set());
        assert!(p.include_all());
        assert_eq!(p.len(), 43);
        assert_eq!(p.generation(), 1);
        assert!(!p.set_include_all(true));
        assert_eq!(p.generation(), 1);
    }

    #[test]
    fn test_jump_to_module_anchor() {
        let mut p = Presentation::new(catalog(20), SlideSetBuilder::default(), true);
        assert!(p.jump_to_module(2));
        assert_eq!(p.current_index(), 10);
        assert_eq!(p.current_module().map(|m| m.rank), Some(2));
        assert!(!p.jump_to_module(99));
    }

    #[test]
    fn test_progress_ratio() {
        let mut p = Presentation::new(catalog(4), SlideSetBuilder::default(), true);
        assert_eq!(p.progress_ratio(), 0.25);
        p.jump(3);
        assert_eq!(p.progress_ratio(), 1.0);

        let empty = Presentation::new(SlideCatalog::default(), SlideSetBuilder::default(), true);
        assert_eq!(empty.progress_ratio(), 0.0);
        assert!(empty.current_slide().is_none());
    }

    #[test]
    fn test_reduced_range_comes_from_builder() {
        let p = Presentation::new(catalog(10), SlideSetBuilder::default(), false);
        assert_eq!(p.reduced_range(), ReducedRange::default());

        let builder = SlideSetBuilder::new(Default::default(), ReducedRange { start: 2, end: 3 });
        let p = Presentation::new(catalog(10), builder, false);
        assert_eq!(p.reduced_range(), ReducedRange { start: 2, end: 3 });
        assert_eq!(p.len(), 8);
    }

    #[test]
    fn test_includes_reduced_range() {
        let mut p = Presentation::new(catalog(43), SlideSetBuilder::default(), false);
        assert!(!p.includes_reduced_range());
        p.toggle_slide_set();
        assert!(p.includes_reduced_range());
    }
}

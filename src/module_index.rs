//! Module index derivation
//!
//! Collapses the active sequence into one navigable anchor per distinct
//! module string. The first occurrence wins permanently: a module string that
//! reappears after another module gets no second entry, even though the
//! slide-set builder flags the reappearance as a module start.

use ratatui::style::Color;
use std::collections::HashSet;

use crate::catalog::module_short_name;
use crate::deck::ActiveSlide;
use crate::theme::MODULE_PALETTE;

/// Anchor color for the module first seen at `rank`
pub fn color(rank: usize) -> Color {
    MODULE_PALETTE[rank % MODULE_PALETTE.len()]
}

/// A navigable module anchor
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Short name (text before the delimiter)
    pub name: String,
    pub full_name: String,
    /// Position of the first slide carrying this module string
    pub start_index: usize,
    /// Order of first appearance, 0-based
    pub rank: usize,
    pub color: Color,
}

/// Ordered, deduplicated modules of an active sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleIndex {
    modules: Vec<Module>,
}

impl ModuleIndex {
    /// Single forward pass over the active sequence
    pub fn derive(active: &[ActiveSlide]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut modules = Vec::new();

        for (index, slide) in active.iter().enumerate() {
            if seen.insert(slide.module.as_str()) {
                let rank = modules.len();
                modules.push(Module {
                    name: module_short_name(&slide.module).to_string(),
                    full_name: slide.module.clone(),
                    start_index: index,
                    rank,
                    color: color(rank),
                });
            }
        }

        Self { modules }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module anchor by rank
    pub fn get(&self, rank: usize) -> Option<&Module> {
        self.modules.get(rank)
    }

    /// The most recently started module at or before `index`.
    ///
    /// Modules are stored in order of first appearance, which is also
    /// ascending `start_index`, so the last match is the greatest start.
    pub fn current(&self, index: usize) -> Option<&Module> {
        self.modules.iter().rev().find(|m| m.start_index <= index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawSlideRecord;
    use crate::deck::SlideSetBuilder;
    use crate::types::LayoutType;

    fn active(modules: &[&str]) -> Vec<ActiveSlide> {
        let records: Vec<RawSlideRecord> = modules
            .iter()
            .enumerate()
            .map(|(i, m)| RawSlideRecord::new(i as u32 + 1, m, "T", LayoutType::Standard))
            .collect();
        SlideSetBuilder::default().build(&records, true)
    }

    #[test]
    fn test_one_entry_per_module_in_first_appearance_order() {
        let index = ModuleIndex::derive(&active(&["A：x", "A：x", "B：y", "C：z", "C：z"]));
        let names: Vec<&str> = index.modules().iter().map(|m| m.name.as_str()).collect();
        let starts: Vec<usize> = index.modules().iter().map(|m| m.start_index).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(starts, vec![0, 2, 3]);
        assert_eq!(index.modules()[1].full_name, "B：y");
    }

    #[test]
    fn test_reappearing_module_keeps_first_anchor() {
        let mut modules = vec!["Intro：i", "Intro：i", "M"];
        modules.extend(std::iter::repeat_n("Other：o", 6));
        modules.push("M");
        let slides = active(&modules);
        let index = ModuleIndex::derive(&slides);

        let m: Vec<&Module> = index.modules().iter().filter(|m| m.full_name == "M").collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].start_index, 2);
        assert!(slides[9].is_module_start);
    }

    #[test]
    fn test_current_module_can_misattribute_recurring_slide() {
        let slides = active(&["A：a", "B：b", "A：a"]);
        let index = ModuleIndex::derive(&slides);
        // Slide 2 carries A, but B is the latest anchor at or before it
        assert_eq!(index.current(2).map(|m| m.name.as_str()), Some("B"));
        assert_eq!(index.current(0).map(|m| m.name.as_str()), Some("A"));
    }

    #[test]
    fn test_colors_cycle_through_palette() {
        assert_eq!(color(0), MODULE_PALETTE[0]);
        assert_eq!(color(7), MODULE_PALETTE[0]);
        assert_eq!(color(9), MODULE_PALETTE[2]);

        let names: Vec<String> = (0..9).map(|i| format!("M{}：m", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let index = ModuleIndex::derive(&active(&refs));
        assert_eq!(index.modules()[8].color, MODULE_PALETTE[1]);
        assert_eq!(index.modules()[8].rank, 8);
    }

    #[test]
    fn test_empty_sequence() {
        let index = ModuleIndex::derive(&[]);
        assert!(index.is_empty());
        assert!(index.current(0).is_none());
    }
}

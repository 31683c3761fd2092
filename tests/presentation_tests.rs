//! Tests for the presentation core
//!
//! These tests drive the built-in deck and small hand-built catalogs through
//! slide-set construction, module derivation, navigation and the
//! full/reduced switch.

use slidedeck::catalog::{RawSlideRecord, SlideCatalog};
use slidedeck::deck::SlideSetBuilder;
use slidedeck::module_index::ModuleIndex;
use slidedeck::navigation::Direction;
use slidedeck::presentation::Presentation;
use slidedeck::types::LayoutType;

fn builtin(include_all: bool) -> Presentation {
    let catalog = SlideCatalog::builtin().expect("built-in catalog");
    Presentation::new(catalog, SlideSetBuilder::default(), include_all)
}

fn catalog_of(modules: &[&str]) -> SlideCatalog {
    SlideCatalog::new(
        modules
            .iter()
            .enumerate()
            .map(|(i, m)| RawSlideRecord::new(i as u32 + 1, m, "Title", LayoutType::Standard))
            .collect(),
    )
}

// =============================================================================
// Slide-set construction
// =============================================================================

#[test]
fn test_reduced_deck_has_thirty_contiguous_slides() {
    let p = builtin(false);
    assert_eq!(p.len(), 30);

    let ids: Vec<u32> = p.slides().iter().map(|s| s.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
}

#[test]
fn test_reduced_deck_skips_five_through_seventeen() {
    let p = builtin(false);
    let sources: Vec<u32> = p.slides().iter().map(|s| s.source_id).collect();

    assert!(sources.iter().all(|id| !(5..=17).contains(id)));
    // Relative order of the survivors is kept
    assert!(sources.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(&sources[..5], &[1, 2, 3, 4, 18]);
}

#[test]
fn test_full_deck_keeps_every_record() {
    let p = builtin(true);
    assert_eq!(p.len(), 43);
    assert!(p.slides().iter().all(|s| s.id == s.source_id));
}

#[test]
fn test_module_start_follows_surviving_predecessor() {
    let p = builtin(false);
    let starts: Vec<u32> = p
        .slides()
        .iter()
        .filter(|s| s.is_module_start)
        .map(|s| s.source_id)
        .collect();
    // Record 4 is the only surviving page of its module
    assert_eq!(starts, vec![1, 4, 18, 24, 30, 36, 41]);
}

#[test]
fn test_qr_layout_is_kept_as_its_own_variant() {
    let p = builtin(true);
    let last = p.slides().last().expect("non-empty deck");
    assert_eq!(last.layout_type, LayoutType::Qr);
}

// =============================================================================
// Module index
// =============================================================================

#[test]
fn test_builtin_modules_in_order_of_first_appearance() {
    let p = builtin(true);
    let names: Vec<&str> = p.modules().modules().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Opening", "Casebook", "Practice", "Craft", "Stories", "Method", "Closing"]
    );
    let ranks: Vec<usize> = p.modules().modules().iter().map(|m| m.rank).collect();
    assert_eq!(ranks, (0..7).collect::<Vec<_>>());
}

#[test]
fn test_recurring_module_keeps_first_anchor_only() {
    let mut modules = vec!["A"; 2];
    modules.push("M");
    modules.extend(std::iter::repeat_n("N", 6));
    modules.push("M");
    modules.push("Z");

    let active = SlideSetBuilder::default().build(catalog_of(&modules).records(), true);
    let index = ModuleIndex::derive(&active);

    let m: Vec<_> = index.modules().iter().filter(|m| m.full_name == "M").collect();
    assert_eq!(m.len(), 1);
    assert_eq!(m[0].start_index, 2);
    assert!(active[9].is_module_start);
    assert_eq!(index.len(), 4);

    // The recurrence is attributed to the most recent anchor before it
    assert_eq!(index.current(9).map(|m| m.full_name.as_str()), Some("N"));
}

#[test]
fn test_module_colors_cycle_by_rank() {
    let names: Vec<String> = (0..20).map(|i| format!("Mod{}：x", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let p = Presentation::new(catalog_of(&refs), SlideSetBuilder::default(), true);

    let modules = p.modules().modules();
    let palette = slidedeck::theme::MODULE_PALETTE.len();
    assert_eq!(modules[0].color, modules[palette].color);
    assert_ne!(modules[0].color, modules[1].color);
}

// =============================================================================
// Navigation across the full/reduced switch
// =============================================================================

#[test]
fn test_position_survives_switch_to_full() {
    let mut p = builtin(false);
    assert!(p.jump(25));
    assert!(p.toggle_slide_set());

    assert_eq!(p.len(), 43);
    assert_eq!(p.current_index(), 25);
}

#[test]
fn test_stranded_position_resets_on_switch_to_reduced() {
    let mut p = builtin(true);
    assert!(p.jump(35));
    assert!(p.toggle_slide_set());

    assert_eq!(p.len(), 30);
    assert_eq!(p.current_index(), 0);
    assert_eq!(p.direction(), Direction::Still);
}

#[test]
fn test_boundaries_are_noops() {
    let mut p = builtin(false);
    assert!(!p.prev());
    assert_eq!(p.current_index(), 0);

    assert!(p.jump(29));
    assert!(!p.next());
    assert_eq!(p.current_index(), 29);
    assert!(!p.jump(30));
    assert_eq!(p.current_index(), 29);
}

#[test]
fn test_jump_to_module_lands_on_anchor() {
    let mut p = builtin(true);
    assert!(p.jump_to_module(2));
    assert_eq!(p.current_slide().map(|s| s.source_id), Some(18));
    assert_eq!(p.direction(), Direction::Forward);
    assert!(p.jump_to_module(0));
    assert_eq!(p.direction(), Direction::Backward);
}

#[test]
fn test_empty_catalog_is_degenerate_not_an_error() {
    let mut p = Presentation::new(SlideCatalog::default(), SlideSetBuilder::default(), false);
    assert!(p.is_empty());
    assert!(p.modules().is_empty());
    assert!(!p.next());
    assert!(!p.prev());
    assert!(!p.jump(0));
    assert!(p.current_slide().is_none());
}

//! Tests for catalog and settings files
//!
//! These tests verify:
//! - Catalog save/load through real files
//! - Validation of hand-edited catalogs
//! - Settings files feeding the slide-set builder

use slidedeck::catalog::{RawSlideRecord, SlideCatalog};
use slidedeck::config::DeckSettings;
use slidedeck::deck::ReducedRange;
use slidedeck::error::DeckError;
use slidedeck::presentation::Presentation;
use slidedeck::types::LayoutType;
use std::fs;
use tempfile::tempdir;

// =============================================================================
// Catalog files
// =============================================================================

#[test]
fn test_builtin_catalog_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("slides.json");

    let catalog = SlideCatalog::builtin().unwrap();
    catalog.save_to_file(&path).unwrap();
    let loaded = SlideCatalog::load_from_file(&path).unwrap();

    assert_eq!(loaded, catalog);
}

#[test]
fn test_missing_catalog_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = SlideCatalog::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}

#[test]
fn test_malformed_catalog_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"id": 1, "module": "A：a""#).unwrap();

    assert!(SlideCatalog::load_from_file(&path).is_err());
}

#[test]
fn test_hand_edited_catalog_with_duplicates_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("slides.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "module": "A：a", "title": "One", "layoutType": "cover"},
            {"id": 2, "module": "A：a", "title": "Two"},
            {"id": 2, "module": "B：b", "title": "Again"}
        ]"#,
    )
    .unwrap();

    let catalog = SlideCatalog::load_from_file(&path).unwrap();
    assert_eq!(catalog.records()[1].layout_type, LayoutType::Standard);

    match catalog.validate() {
        Err(DeckError::Validation(issues)) => {
            assert_eq!(issues.len(), 1);
            assert!(issues[0].contains("id 2"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_chart_data_years_accept_numbers_and_text() {
    let catalog = SlideCatalog::from_json_str(
        r#"[{
            "id": 1, "module": "A：a", "title": "Costs",
            "chartData": [{"year": 2023, "cost": 1.5}, {"year": "2024Q1", "cost": 0.25}]
        }]"#,
    )
    .unwrap();

    let points = catalog.records()[0].chart_data.as_ref().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].year.to_string(), "2023");
    assert_eq!(points[1].year.to_string(), "2024Q1");
}

// =============================================================================
// Settings files
// =============================================================================

#[test]
fn test_settings_file_moves_reduced_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"reducedRange": {"start": 2, "end": 3}}"#).unwrap();

    let settings = DeckSettings::load_from_file(&path).unwrap();
    assert_eq!(settings.reduced_range, ReducedRange { start: 2, end: 3 });

    let records = (1..=6)
        .map(|id| RawSlideRecord::new(id, "A：a", "T", LayoutType::Standard))
        .collect();
    let p = Presentation::new(SlideCatalog::new(records), settings.builder(), false);
    let sources: Vec<u32> = p.slides().iter().map(|s| s.source_id).collect();
    assert_eq!(sources, vec![1, 4, 5, 6]);
}

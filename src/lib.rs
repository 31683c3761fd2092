//! slidedeck Library
//!
//! This library provides the presentation core (slide-set construction,
//! module index, navigation) and the terminal shell that presents it.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod deck;
pub mod error;
pub mod loader;
pub mod module_index;
pub mod navigation;
pub mod presentation;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use assets::{AssetRef, AssetResolver, AssetTable, ResolvedAssets};
pub use catalog::{RawSlideRecord, SlideCatalog};
pub use config::{DeckConfig, DeckSettings};
pub use deck::{ActiveSlide, ReducedRange, SlideSetBuilder};
pub use error::DeckError;
pub use loader::{AssetBoard, AssetLoader, LoadMessage, LoadOutcome, Subscription, VisibilityObserver};
pub use module_index::{Module, ModuleIndex};
pub use navigation::{Direction, NavigationController, NavigationState};
pub use presentation::Presentation;
pub use types::{ChartPoint, ChartYear, LayoutType};

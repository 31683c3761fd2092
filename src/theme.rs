//! Centralized theme and styling for the presenter
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application, including the
//! palette that module anchors cycle through.
//!
//! # Usage
//! ```rust
//! use slidedeck::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
/// All colors should be defined here rather than hardcoded in components
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Slide card background
    pub const BG_CARD: Color = Color::Rgb(255, 252, 246);

    /// Full-bleed document page background
    pub const BG_DOCUMENT: Color = Color::Black;

    /// Asset placeholder background while a load is pending
    pub const BG_PLACEHOLDER: Color = Color::Rgb(224, 224, 224);

    /// Muted panel background (asset panels, chart area)
    pub const BG_MUTED: Color = Color::Rgb(241, 236, 228);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::Rgb(30, 41, 59);

    /// Secondary/muted text color
    pub const FG_MUTED: Color = Color::Rgb(100, 116, 139);

    /// Text drawn on dark backgrounds
    pub const FG_INVERSE: Color = Color::White;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Hot pink - titles, borders, progress start
    pub const PRIMARY: Color = Color::Rgb(255, 105, 180);

    /// Lemon yellow - module label, data bubble
    pub const SECONDARY: Color = Color::Rgb(255, 214, 10);

    /// Electric blue - highlighted numbers, subtitles
    pub const ACCENT: Color = Color::Rgb(46, 134, 255);

    // -------------------------------------------------------------------------
    // Chart Colors
    // -------------------------------------------------------------------------

    /// First bar of a chart
    pub const CHART_FIRST: Color = Color::Rgb(99, 102, 241);

    /// Every other bar
    pub const CHART_REST: Color = Color::Rgb(236, 72, 153);

    // -------------------------------------------------------------------------
    // Navigation Colors
    // -------------------------------------------------------------------------

    /// Inactive dock anchor
    pub const ANCHOR_INACTIVE: Color = Color::Rgb(200, 200, 200);

    /// Disabled control
    pub const DISABLED: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Progress bar track
    pub const PROGRESS_TRACK: Color = Color::Rgb(229, 231, 235);
}

/// Colors module anchors cycle through, in order of first appearance
pub const MODULE_PALETTE: [Color; 7] = [
    Colors::PRIMARY,
    Colors::SECONDARY,
    Colors::ACCENT,
    Color::Rgb(0xFF, 0x9F, 0x1C),
    Color::Rgb(0x2E, 0xC4, 0xB6),
    Color::Rgb(0x9B, 0x5D, 0xE5),
    Color::Rgb(0xF1, 0x5B, 0xB5),
];

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
/// Use these instead of constructing styles inline for consistency
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Slide title (pink, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Emphasized numeric token inside data text
    pub fn highlight_number() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Floating module label
    pub fn module_label() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Slide number badge
    pub fn badge() -> Style {
        Style::default()
            .fg(Colors::FG_INVERSE)
            .bg(Color::Rgb(60, 60, 60))
            .add_modifier(Modifier::BOLD)
    }

    /// Card border
    pub fn border() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Pending asset placeholder
    pub fn placeholder() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .bg(Colors::BG_PLACEHOLDER)
            .add_modifier(Modifier::ITALIC)
    }

    /// Loaded asset panel
    pub fn asset_ready() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_MUTED)
    }

    /// Enabled navigation control
    pub fn control() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Control at a sequence boundary
    pub fn control_disabled() -> Style {
        Style::default().fg(Colors::DISABLED)
    }

    /// Navigation hint in the footer
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Progress bar fill
    pub fn progress() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .bg(Colors::PROGRESS_TRACK)
    }
}

/// UI layout constants
pub struct UiConstants;

impl UiConstants {
    /// Rows reserved for the module dock
    pub const DOCK_HEIGHT: u16 = 3;

    /// Rows reserved for the footer controls
    pub const FOOTER_HEIGHT: u16 = 1;

    /// Rows reserved for the progress bar
    pub const PROGRESS_HEIGHT: u16 = 1;

    /// Width of an inactive dock anchor
    pub const ANCHOR_WIDTH: u16 = 3;

    /// Width of the active dock anchor
    pub const ANCHOR_ACTIVE_WIDTH: u16 = 5;

    /// Gap between dock anchors
    pub const ANCHOR_GAP: u16 = 1;

    /// Share of the width given to the asset panel in the standard layout
    pub const ASSET_PANEL_PERCENT: u16 = 45;
}

//! Type-safe slide types
//!
//! Layout variants and chart data carried by catalog records. Layouts are a
//! closed enum so every renderer must handle every variant, including `qr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Visual layout of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LayoutType {
    /// Full-bleed title slide with a background asset
    Cover,
    /// Scanned document page shown edge to edge
    Pdf,
    /// Two side-by-side cards with a closing insight
    Comparison,
    /// Asset panel next to a text panel
    #[default]
    Standard,
    /// Large scannable code with supporting text
    Qr,
}

impl LayoutType {
    /// Whether the floating module label is drawn on this layout
    pub fn shows_module_label(&self) -> bool {
        !matches!(self, Self::Cover | Self::Pdf)
    }
}

/// Year axis value of a chart point; catalogs use both numbers and strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartYear {
    Number(i64),
    Text(String),
}

impl fmt::Display for ChartYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One bar of a slide's cost chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: ChartYear,
    pub cost: f64,
    #[serde(default)]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_layout_parses_lowercase() {
        assert_eq!("qr".parse::<LayoutType>().ok(), Some(LayoutType::Qr));
        assert_eq!("pdf".parse::<LayoutType>().ok(), Some(LayoutType::Pdf));
        assert!("slideshow".parse::<LayoutType>().is_err());
    }

    #[test]
    fn test_layout_has_five_variants() {
        assert_eq!(LayoutType::iter().count(), 5);
    }

    #[test]
    fn test_layout_serde_matches_catalog_spelling() {
        let parsed: LayoutType = serde_json::from_str("\"comparison\"").unwrap();
        assert_eq!(parsed, LayoutType::Comparison);
        assert_eq!(serde_json::to_string(&LayoutType::Qr).unwrap(), "\"qr\"");
    }

    #[test]
    fn test_module_label_visibility() {
        assert!(!LayoutType::Cover.shows_module_label());
        assert!(!LayoutType::Pdf.shows_module_label());
        assert!(LayoutType::Qr.shows_module_label());
        assert!(LayoutType::Standard.shows_module_label());
    }

    #[test]
    fn test_chart_year_accepts_numbers_and_strings() {
        let points: Vec<ChartPoint> = serde_json::from_str(
            r#"[{"year": 2020, "cost": 12.5, "label": "$12.5"}, {"year": "2024", "cost": 0.4}]"#,
        )
        .unwrap();
        assert_eq!(points[0].year.to_string(), "2020");
        assert_eq!(points[1].year.to_string(), "2024");
        assert_eq!(points[1].label, "");
    }
}

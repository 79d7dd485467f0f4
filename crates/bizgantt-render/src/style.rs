//! Colors and fonts for SVG output

use bizgantt_core::FontId;
use serde::{Deserialize, Serialize};

/// Visual style of a rendered chart.
///
/// Loaded from the `[style]` table of a config file; every field has a
/// default so partial tables are fine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    pub background_color: String,
    /// Header frame fill
    pub timeline_color: String,
    /// Header label color
    pub timeline_text_color: String,
    pub text_color: String,
    pub bar_color: String,
    pub milestone_color: String,
    /// Elapsed business days
    pub today_color: String,
    /// Elapsed part of the current day
    pub today_partial_color: String,
    pub tick_color: String,
    pub tick_stroke_width: u32,
    /// Chart border and grid lines
    pub border_color: String,
    pub font_family: String,
    pub timeline_font_size: u32,
    pub bar_font_size: u32,
    pub date_font_size: u32,
    /// Corner radius for bars and the header frame
    pub corner_radius: u32,
    /// Stylesheet URL imported at the top of the document (web fonts)
    pub font_import: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background_color: "white".into(),
            timeline_color: "#44536a".into(),
            timeline_text_color: "white".into(),
            text_color: "black".into(),
            bar_color: "#589ad7".into(),
            milestone_color: "#ecb22f".into(),
            today_color: "#d4182d".into(),
            today_partial_color: "orange".into(),
            tick_color: "white".into(),
            tick_stroke_width: 2,
            border_color: "#f0f0f0".into(),
            font_family: "Roboto".into(),
            timeline_font_size: 14,
            bar_font_size: 12,
            date_font_size: 11,
            corner_radius: 4,
            font_import: None,
        }
    }
}

impl SvgStyle {
    pub fn font_size(&self, font: FontId) -> u32 {
        match font {
            FontId::Timeline => self.timeline_font_size,
            FontId::Bar => self.bar_font_size,
            FontId::Date => self.date_font_size,
        }
    }

    pub fn font_weight(&self, font: FontId) -> &'static str {
        match font {
            FontId::Timeline | FontId::Bar => "bold",
            FontId::Date => "normal",
        }
    }

    pub fn text_fill(&self, font: FontId) -> &str {
        match font {
            FontId::Timeline => &self.timeline_text_color,
            FontId::Bar | FontId::Date => &self.text_color,
        }
    }
}

//! Text width estimation without a font rasterizer

use crate::SvgStyle;
use bizgantt_core::{FontId, TextMeasure};

/// Estimates label widths from per-glyph advance ratios.
///
/// Good enough to keep header labels from colliding; real glyph widths of
/// the browser font will differ by a few pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatedMetrics {
    timeline_size: f64,
    bar_size: f64,
    date_size: f64,
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self::from_style(&SvgStyle::default())
    }
}

impl EstimatedMetrics {
    pub fn from_style(style: &SvgStyle) -> Self {
        Self {
            timeline_size: f64::from(style.timeline_font_size),
            bar_size: f64::from(style.bar_font_size),
            date_size: f64::from(style.date_font_size),
        }
    }

    fn size(&self, font: FontId) -> f64 {
        match font {
            FontId::Timeline => self.timeline_size,
            FontId::Bar => self.bar_size,
            FontId::Date => self.date_size,
        }
    }
}

impl TextMeasure for EstimatedMetrics {
    fn text_width(&self, text: &str, font: FontId) -> u32 {
        let weight = match font {
            FontId::Timeline | FontId::Bar => 1.06,
            FontId::Date => 1.0,
        };
        let ems: f64 = text.chars().map(advance).sum();
        (ems * self.size(font) * weight).ceil() as u32
    }
}

/// Advance width in ems
fn advance(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | '\'' | ':' | ';' | '|' | '!' => 0.25,
        ' ' | 'f' | 'r' | 't' | 'I' | '-' | '(' | ')' | '/' => 0.33,
        'm' | 'w' | 'M' | 'W' => 0.85,
        c if c.is_ascii_digit() => 0.56,
        c if c.is_uppercase() => 0.66,
        _ => 0.54,
    }
}

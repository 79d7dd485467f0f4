//! Chart geometry settings

use bizgantt_core::Px;
use serde::{Deserialize, Serialize};

/// Spacing and sizes used to place header, today marker and task rows.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Chart width used when no width is forced
    pub default_chart_width: Px,
    /// Horizontal margin around the chart
    pub padding_x: Px,
    /// Inset of header labels from the chart edge
    pub label_inset_x: Px,
    /// Minimum gap after the first header label
    pub label_gap_x: Px,
    /// Vertical margin around header and rows
    pub padding_y: Px,
    /// Gap between a task title and its bar
    pub title_gap_y: Px,
    /// Gap between rows
    pub row_gap_y: Px,
    pub header_height: Px,
    pub tick_height: Px,
    pub today_height: Px,
    pub bar_height: Px,
    pub text_height: Px,
    pub milestone_width: Px,
    /// Header font size, used to centre labels vertically
    pub timeline_font_size: Px,
    /// chrono format for header and date-range labels
    pub date_format: String,
    /// Widest expected date-range label, measured to size the canvas
    pub date_label_sample: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_chart_width: 1024,
            padding_x: 16,
            label_inset_x: 3,
            label_gap_x: 12,
            padding_y: 16,
            title_gap_y: 4,
            row_gap_y: 8,
            header_height: 48,
            tick_height: 12,
            today_height: 5,
            bar_height: 18,
            text_height: 16,
            milestone_width: 16,
            timeline_font_size: 14,
            date_format: "%b %-d".into(),
            date_label_sample: "May 22 - May 22".into(),
        }
    }
}

impl LayoutConfig {
    /// Height of one task row (title, gap, bar, gap)
    pub fn row_height(&self) -> Px {
        self.text_height + self.title_gap_y + self.bar_height + self.row_gap_y
    }

    /// Canvas height needed for `rows` tasks
    pub fn auto_height(&self, rows: usize) -> Px {
        self.padding_y * 3 + self.header_height + rows as Px * self.row_height()
    }

    /// Baseline of text vertically centred in the header
    pub fn header_baseline(&self) -> Px {
        self.padding_y + self.header_height - (self.header_height - self.timeline_font_size) / 2 - 2
    }

    /// Top of the tick marks and grid lines below the header labels
    pub fn tick_top(&self) -> Px {
        self.header_baseline() + 2 + self.title_gap_y
    }

    /// Top of the first task row
    pub fn rows_top(&self) -> Px {
        self.padding_y * 2 + self.header_height
    }
}

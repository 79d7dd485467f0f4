//! # bizgantt-render
//!
//! SVG backend for computed chart layouts.
//!
//! The renderer does no date arithmetic: every coordinate comes from the
//! [`ChartLayout`] produced by `bizgantt-layout`. This crate also provides
//! [`EstimatedMetrics`], a [`TextMeasure`] that works without font files.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bizgantt_core::Renderer;
//! use bizgantt_layout::{LayoutEngine, LayoutOptions};
//! use bizgantt_render::{EstimatedMetrics, SvgRenderer};
//!
//! let layout = LayoutEngine::new(EstimatedMetrics::default())
//!     .layout(&tasks, &LayoutOptions::new(now))?;
//! let svg = SvgRenderer::new().render(&layout)?;
//! ```
//!
//! [`TextMeasure`]: bizgantt_core::TextMeasure

pub mod metrics;
pub mod style;

pub use metrics::EstimatedMetrics;
pub use style::SvgStyle;

use bizgantt_core::{
    ChartLayout, Rect, RenderError, Renderer, TaskLayout, TaskShape, TextLabel, TimelineHeader,
    TodayMarker,
};
use svg::node::element::{Definitions, Group, Line, Polygon, Rectangle, Style, Text};
use svg::Document;

/// Draws a [`ChartLayout`] as a standalone SVG document
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    style: SvgStyle,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: SvgStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &SvgStyle {
        &self.style
    }

    fn text(&self, label: &TextLabel) -> Text {
        let s = &self.style;
        Text::new(label.text.as_str())
            .set("x", label.x)
            .set("y", label.y)
            .set("font-family", s.font_family.as_str())
            .set("font-size", s.font_size(label.font))
            .set("font-weight", s.font_weight(label.font))
            .set("fill", s.text_fill(label.font))
    }

    fn rect(&self, rect: &Rect, fill: &str) -> Rectangle {
        Rectangle::new()
            .set("x", rect.x)
            .set("y", rect.y)
            .set("width", rect.width)
            .set("height", rect.height)
            .set("fill", fill)
    }

    fn rounded(&self, rect: &Rect, fill: &str) -> Rectangle {
        self.rect(rect, fill)
            .set("rx", self.style.corner_radius)
            .set("ry", self.style.corner_radius)
    }

    fn render_header(&self, header: &TimelineHeader) -> Group {
        let s = &self.style;
        let mut group = Group::new().set("class", "header");

        group = group.add(self.rounded(&header.frame, &s.timeline_color));

        for rule in &header.grid_lines {
            let line = Line::new()
                .set("x1", rule.x1)
                .set("y1", rule.y1)
                .set("x2", rule.x2)
                .set("y2", rule.y2)
                .set("stroke", s.border_color.as_str())
                .set("stroke-width", 1);
            group = group.add(line);
        }

        for mark in &header.tick_marks {
            let line = Line::new()
                .set("x1", mark.x1)
                .set("y1", mark.y1)
                .set("x2", mark.x2)
                .set("y2", mark.y2)
                .set("stroke", s.tick_color.as_str())
                .set("stroke-width", s.tick_stroke_width);
            group = group.add(line);
        }

        for label in &header.labels {
            group = group.add(self.text(label));
        }

        group
    }

    /// Elapsed-time bar: rounded on the bottom left only, so it reads as
    /// hanging off the header frame.
    fn render_today(&self, today: &TodayMarker) -> Group {
        let s = &self.style;
        let mut group = Group::new().set("class", "today");
        let bar = today.bar;

        if bar.width > 0 {
            group = group.add(self.rounded(&bar, &s.today_color));

            let top_half = Rect {
                height: bar.height / 2,
                ..bar
            };
            group = group.add(self.rect(&top_half, &s.today_color));

            let radius = s.corner_radius as i32;
            if bar.width > radius {
                let right = Rect {
                    x: bar.x + radius,
                    width: bar.width - radius,
                    ..bar
                };
                group = group.add(self.rect(&right, &s.today_color));
            }
        }

        if today.partial.width > 0 {
            group = group.add(self.rect(&today.partial, &s.today_partial_color));
        }

        group
    }

    fn render_task(&self, task: &TaskLayout) -> Group {
        let s = &self.style;
        let mut group = Group::new()
            .set("class", "task")
            .set("data-id", task.id.as_str());

        group = group.add(self.text(&task.title));

        match &task.shape {
            TaskShape::Bar(rect) => {
                group = group.add(self.rounded(rect, &s.bar_color));
            }
            shape @ TaskShape::Milestone { .. } => {
                if let Some(corners) = shape.diamond() {
                    let points = corners
                        .iter()
                        .map(|p| format!("{},{}", p.x, p.y))
                        .collect::<Vec<_>>()
                        .join(" ");
                    let diamond = Polygon::new()
                        .set("points", points)
                        .set("fill", s.milestone_color.as_str());
                    group = group.add(diamond);
                }
            }
        }

        group.add(self.text(&task.dates))
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, layout: &ChartLayout) -> Result<String, RenderError> {
        if layout.tasks.is_empty() {
            return Err(RenderError::InvalidData("No tasks to render".into()));
        }
        if layout.width <= 0 || layout.height <= 0 {
            return Err(RenderError::InvalidData(format!(
                "Canvas {}x{} has no area",
                layout.width, layout.height
            )));
        }

        let s = &self.style;
        let mut document = Document::new()
            .set("width", layout.width)
            .set("height", layout.height)
            .set("viewBox", (0, 0, layout.width, layout.height))
            .set("xmlns", "http://www.w3.org/2000/svg");

        if let Some(url) = &s.font_import {
            let css = format!("@import url('{}');", url);
            document = document.add(Definitions::new().add(Style::new(css)));
        }

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", s.background_color.as_str());
        document = document.add(background);

        document = document.add(self.render_header(&layout.header));
        document = document.add(self.render_today(&layout.today));

        let mut rows = Group::new().set("class", "tasks");
        for task in &layout.tasks {
            rows = rows.add(self.render_task(task));
        }
        document = document.add(rows);

        let mut output = Vec::new();
        svg::write(&mut output, &document)
            .map_err(|e| RenderError::Format(format!("Failed to write SVG: {}", e)))?;

        String::from_utf8(output).map_err(|e| RenderError::Format(format!("Invalid UTF-8: {}", e)))
    }
}

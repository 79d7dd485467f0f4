//! # bizgantt-core
//!
//! Core domain model and traits for the bizgantt timeline engine.
//!
//! This crate provides:
//! - Domain types: `Task`, `DateRange`, `Tick`, `Position`, `ChartLayout`
//! - Business-day arithmetic (`calendar`)
//! - Hierarchy/zoom filtering (`filter`)
//! - Core traits: `TextMeasure`, `Renderer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use bizgantt_core::{DateRange, Task};
//! use chrono::NaiveDate;
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(17, 0, 0).unwrap();
//!
//! let tasks = vec![Task::new("1", monday, wednesday).title("Design").duration_hours(16)];
//! let range = DateRange::from_tasks(&tasks).unwrap();
//! assert_eq!(range.business_days(), 3);
//! ```

pub mod calendar;
pub mod filter;

pub use calendar::{advance, snap_forward_past_weekend, weekdays_between};
pub use filter::TaskFilter;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Dot-separated hierarchy path, e.g. "1.4.1"
pub type TaskId = String;

/// Pixel coordinate or length
pub type Px = i32;

// ============================================================================
// Task
// ============================================================================

/// A row of the task list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Hierarchy path
    pub id: TaskId,
    /// Human-readable title
    pub title: String,
    /// Start timestamp
    pub start: NaiveDateTime,
    /// End timestamp
    pub end: NaiveDateTime,
    /// Planned duration; `None` marks a milestone
    pub duration_hours: Option<i64>,
    /// Work effort
    pub effort_hours: Option<i64>,
    /// Completion marker as exported (e.g. "Yes", "50%")
    pub completed: String,
    /// Assignee name
    pub assigned: String,
}

impl Task {
    /// Create a task spanning `start..end`.
    ///
    /// The task is a milestone until a duration is set.
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            start,
            end,
            duration_hours: None,
            effort_hours: None,
            completed: String::new(),
            assigned: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn duration_hours(mut self, hours: i64) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    pub fn effort_hours(mut self, hours: i64) -> Self {
        self.effort_hours = Some(hours);
        self
    }

    pub fn completed(mut self, marker: impl Into<String>) -> Self {
        self.completed = marker.into();
        self
    }

    pub fn assigned(mut self, who: impl Into<String>) -> Self {
        self.assigned = who.into();
        self
    }

    /// Milestones have no duration (or a zero one) and render as a point
    pub fn is_milestone(&self) -> bool {
        matches!(self.duration_hours, None | Some(0))
    }

    /// Number of dot-separated segments in the id ("1.4.1" is depth 3)
    pub fn depth(&self) -> usize {
        self.id.split('.').count()
    }

    /// Label drawn above the bar
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.title)
    }
}

// ============================================================================
// Date Range
// ============================================================================

/// Span covered by a set of tasks, end exclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest task start
    pub start: NaiveDateTime,
    /// Latest task end advanced by one calendar day
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Compute the range over `tasks`.
    ///
    /// Fails with [`LayoutError::EmptyDataset`] when there is nothing to span.
    pub fn from_tasks(tasks: &[Task]) -> Result<Self, LayoutError> {
        let start = tasks.iter().map(|t| t.start).min();
        let end = tasks.iter().map(|t| t.end).max();
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                start,
                end: end + Duration::days(1),
            }),
            _ => Err(LayoutError::EmptyDataset),
        }
    }

    /// Business days in `[start, end)`
    pub fn business_days(&self) -> i64 {
        weekdays_between(self.start, self.end)
    }

    /// Whether `at` falls inside the range (exclusive on both ends)
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at > self.start && at <= self.end
    }
}

// ============================================================================
// Ticks and Positions
// ============================================================================

/// One calendar cell of the timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// First pixel, relative to the chart origin
    pub pixel_start: Px,
    /// Last pixel (inclusive)
    pub pixel_end: Px,
    /// Business day the cell begins on
    pub start_date: NaiveDate,
    /// Nominal number of business days in the cell
    pub business_days: u32,
}

impl Tick {
    pub fn pixel_width(&self) -> Px {
        self.pixel_end - self.pixel_start + 1
    }

    /// Pixels per business day inside this cell
    pub fn day_width(&self) -> Px {
        self.pixel_width() / self.business_days.max(1) as Px
    }
}

/// Resolved horizontal pixel interval for a (start, end) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x1: Px,
    pub x2: Px,
}

impl Position {
    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }
}

// ============================================================================
// Chart Layout (engine output)
// ============================================================================

/// Axis-aligned rectangle in canvas coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Line {
    pub x1: Px,
    pub y1: Px,
    pub x2: Px,
    pub y2: Px,
}

/// Fonts the engine asks the measurement collaborator about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontId {
    /// Bold header labels
    Timeline,
    /// Bold task titles
    Bar,
    /// Regular date-range labels
    Date,
}

/// Text placed at a baseline anchor
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextLabel {
    pub x: Px,
    pub y: Px,
    pub text: String,
    pub font: FontId,
}

/// Shape drawn for a task
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskShape {
    Bar(Rect),
    /// Diamond centred horizontally on `top.x`
    Milestone { top: Point, width: Px, height: Px },
}

impl TaskShape {
    pub fn is_milestone(&self) -> bool {
        matches!(self, TaskShape::Milestone { .. })
    }

    /// Left, top, right, bottom corners of a milestone diamond
    pub fn diamond(&self) -> Option<[Point; 4]> {
        match *self {
            TaskShape::Bar(_) => None,
            TaskShape::Milestone { top, width, height } => Some([
                Point { x: top.x - width / 2, y: top.y + height / 2 },
                top,
                Point { x: top.x + width / 2, y: top.y + height / 2 },
                Point { x: top.x, y: top.y + height },
            ]),
        }
    }
}

/// Geometry for one task row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskLayout {
    pub id: TaskId,
    pub title: TextLabel,
    pub shape: TaskShape,
    pub dates: TextLabel,
    /// Resolved interval relative to the chart origin
    pub position: Position,
}

/// The date scale across the top of the chart
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimelineHeader {
    pub frame: Rect,
    pub labels: Vec<TextLabel>,
    pub tick_marks: Vec<Line>,
    pub grid_lines: Vec<Line>,
}

/// Progress bar under the header showing elapsed time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodayMarker {
    /// Whole elapsed business days
    pub bar: Rect,
    /// Elapsed part of the current day
    pub partial: Rect,
}

/// Everything a renderer needs to draw the chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartLayout {
    /// Canvas width
    pub width: Px,
    /// Canvas height
    pub height: Px,
    /// Canvas x of pixel 0 of the tick table
    pub chart_x: Px,
    /// Drawable width the ticks were generated for
    pub chart_width: Px,
    pub day_width: Px,
    pub range: DateRange,
    pub ticks: Vec<Tick>,
    pub header: TimelineHeader,
    pub today: TodayMarker,
    pub tasks: Vec<TaskLayout>,
}

// ============================================================================
// Traits
// ============================================================================

/// Estimates rendered text width in pixels
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: FontId) -> u32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, FontId) -> u32,
{
    fn text_width(&self, text: &str, font: FontId) -> u32 {
        self(text, font)
    }
}

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a computed layout to the output format
    fn render(&self, layout: &ChartLayout) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Layout error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("No tasks left to lay out after filtering")]
    EmptyDataset,

    #[error("Tick granularity must be at least one business day")]
    InvalidTickDays,

    #[error("Cannot fit {business_days} business days into {width}px")]
    DegenerateScale { width: Px, business_days: i64 },

    #[error("Cannot determine position for {start} - {end}")]
    Unresolvable {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl LayoutError {
    /// True for invariant violations inside the engine rather than bad data
    pub fn is_internal(&self) -> bool {
        matches!(self, LayoutError::Unresolvable { .. })
    }
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================

//! # bizgantt-layout
//!
//! Date-to-pixel layout engine.
//!
//! This crate provides:
//! - Tick table generation over a business-day calendar
//! - Resolution of (start, end) pairs to pixel intervals
//! - The layout driver producing a complete [`ChartLayout`]
//!
//! ## Example
//!
//! ```rust
//! use bizgantt_core::{FontId, Task};
//! use bizgantt_layout::{LayoutEngine, LayoutOptions};
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let tasks = vec![Task::new("1", day(1), day(3)).title("Design").duration_hours(16)];
//!
//! let engine = LayoutEngine::new(|text: &str, _font: FontId| text.len() as u32 * 8);
//! let layout = engine
//!     .layout(&tasks, &LayoutOptions::new(day(2)).width(1024))
//!     .unwrap();
//! assert_eq!(layout.tasks.len(), 1);
//! ```
//!
//! [`ChartLayout`]: bizgantt_core::ChartLayout

pub mod config;
pub mod engine;
pub mod resolve;
pub mod ticks;

pub use config::LayoutConfig;
pub use engine::{LayoutEngine, LayoutOptions};
pub use resolve::PositionResolver;
pub use ticks::TickGenerator;

//! Tick table generation
//!
//! The chart is divided into cells of `tick_days` business days each. Every
//! business day gets the same number of pixels (`day_width`), so a cell is
//! `day_width * tick_days` pixels wide and cells tile the drawable width with
//! no gaps:
//!
//! ```text
//! pixel  0        198       396       594
//!        |--------|---------|---------|---- ...
//! date   Mon 1    Tue 2     Wed 3     Thu 4
//! ```

use bizgantt_core::{advance, LayoutError, Px, Tick};
use chrono::NaiveDateTime;
use tracing::debug;

/// Builds the tick table for a drawable width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickGenerator {
    /// Drawable width in pixels
    pub width: Px,
    /// Business days per tick
    pub tick_days: u32,
}

impl TickGenerator {
    pub fn new(width: Px, tick_days: u32) -> Self {
        Self { width, tick_days }
    }

    /// Pixels per business day when `business_days` must fit the width
    pub fn day_width(&self, business_days: i64) -> Result<Px, LayoutError> {
        let degenerate = LayoutError::DegenerateScale {
            width: self.width,
            business_days,
        };
        if business_days <= 0 || self.width <= 0 {
            return Err(degenerate);
        }
        match i64::from(self.width) / business_days {
            w if w <= 0 => Err(degenerate),
            w => Ok(w as Px),
        }
    }

    /// Generate ticks starting at `anchor` until the pixel cursor leaves the
    /// drawable width.
    pub fn generate(
        &self,
        anchor: NaiveDateTime,
        business_days: i64,
    ) -> Result<Vec<Tick>, LayoutError> {
        if self.tick_days == 0 {
            return Err(LayoutError::InvalidTickDays);
        }
        let day_width = self.day_width(business_days)?;
        let step = day_width * self.tick_days as Px;

        let mut ticks = vec![Tick {
            pixel_start: 0,
            pixel_end: step - 1,
            start_date: anchor.date(),
            business_days: self.tick_days,
        }];

        let mut date = anchor;
        let mut cursor = step;
        while cursor < self.width {
            date = advance(date, f64::from(self.tick_days));
            ticks.push(Tick {
                pixel_start: cursor,
                pixel_end: cursor + step - 1,
                start_date: date.date(),
                business_days: self.tick_days,
            });
            cursor += step;
        }

        debug!(
            day_width,
            tick_days = self.tick_days,
            count = ticks.len(),
            "generated tick table"
        );
        Ok(ticks)
    }
}

//! Date pair to pixel interval resolution

use bizgantt_core::{weekdays_between, LayoutError, Position, Px, Tick};
use chrono::{NaiveDate, NaiveDateTime};

/// Resolves (start, end) pairs against a tick table
#[derive(Clone, Copy, Debug)]
pub struct PositionResolver<'a> {
    ticks: &'a [Tick],
}

impl<'a> PositionResolver<'a> {
    pub fn new(ticks: &'a [Tick]) -> Self {
        Self { ticks }
    }

    /// Pixel interval for a task running from `start` to `end`.
    ///
    /// A task always covers at least one day width. Starts that fall between
    /// tick boundaries are placed by counting business days back from the
    /// next tick, or forward from the last one.
    pub fn resolve(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Position, LayoutError> {
        let span = match weekdays_between(start, end) {
            0 => 1,
            n => n as Px,
        };
        let start_day = start.date();

        for tick in self.ticks {
            let per_day = tick.day_width();

            if tick.start_date == start_day {
                let x1 = tick.pixel_start;
                return Ok(Position {
                    x1,
                    x2: x1 + per_day * span,
                });
            }

            if tick.start_date > start_day {
                let days_adj = weekdays_between(start, midnight(tick.start_date)) as Px + 1;
                let x1 = tick.pixel_start - per_day * days_adj;
                return Ok(Position {
                    x1,
                    x2: x1 + per_day * span,
                });
            }
        }

        // Past the last tick's start but still inside its cell
        if let Some(last) = self.ticks.last() {
            let into = weekdays_between(midnight(last.start_date), start);
            if into <= i64::from(last.business_days) {
                let per_day = last.day_width();
                let x1 = last.pixel_start + per_day * into as Px;
                return Ok(Position {
                    x1,
                    x2: x1 + per_day * span,
                });
            }
        }

        Err(LayoutError::Unresolvable { start, end })
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

//! Chart layout driver
//!
//! Turns a filtered task list into a [`ChartLayout`]:
//!
//! 1. Date range over all tasks (end advanced by one day)
//! 2. Tick table for the drawable width
//! 3. Header labels, tick marks and grid lines
//! 4. Today marker
//! 5. One row per task, in input order

use crate::{LayoutConfig, PositionResolver, TickGenerator};
use bizgantt_core::{
    ChartLayout, DateRange, FontId, LayoutError, Line, Point, Position, Px, Rect, Task,
    TaskLayout, TaskShape, TextLabel, TextMeasure, Tick, TimelineHeader, TodayMarker,
};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Per-run inputs that are not part of the chart style
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Forced canvas width; `None` sizes the chart automatically
    pub width: Option<Px>,
    /// Forced canvas height; `None` fits all rows
    pub height: Option<Px>,
    /// Business days per tick
    pub tick_days: u32,
    /// Moment the today marker is drawn for
    pub now: NaiveDateTime,
}

impl LayoutOptions {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            width: None,
            height: None,
            tick_days: 1,
            now,
        }
    }

    /// Force the canvas width. Zero keeps automatic sizing.
    pub fn width(mut self, width: Px) -> Self {
        self.width = Some(width).filter(|w| *w > 0);
        self
    }

    /// Force the canvas height. Zero keeps automatic sizing.
    pub fn height(mut self, height: Px) -> Self {
        self.height = Some(height).filter(|h| *h > 0);
        self
    }

    pub fn tick_days(mut self, days: u32) -> Self {
        self.tick_days = days;
        self
    }
}

/// Lays out charts using injected text metrics
#[derive(Clone, Debug)]
pub struct LayoutEngine<M> {
    config: LayoutConfig,
    measure: M,
}

impl<M: TextMeasure> LayoutEngine<M> {
    pub fn new(measure: M) -> Self {
        Self {
            config: LayoutConfig::default(),
            measure,
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `tasks`, which must already be filtered
    pub fn layout(
        &self,
        tasks: &[Task],
        options: &LayoutOptions,
    ) -> Result<ChartLayout, LayoutError> {
        let config = &self.config;
        let range = DateRange::from_tasks(tasks)?;
        let business_days = range.business_days();

        // The header spans `frame_width`; an automatic canvas leaves room to
        // the right for the last date-range label.
        let (frame_width, canvas_width) = match options.width {
            Some(width) => (width, width),
            None => {
                let sample = self.measure_px(&config.date_label_sample, FontId::Date);
                let width = config.default_chart_width;
                (width, width + config.padding_x + sample)
            }
        };
        let height = options
            .height
            .unwrap_or_else(|| config.auto_height(tasks.len()));

        let chart_width = frame_width - config.padding_x * 2;
        let ticks = TickGenerator::new(chart_width, options.tick_days)
            .generate(range.start, business_days)?;
        let day_width = ticks[0].day_width();
        debug!(
            start = %range.start,
            end = %range.end,
            business_days,
            chart_width,
            day_width,
            "computed date range"
        );

        let resolver = PositionResolver::new(&ticks);
        let positions = tasks
            .par_iter()
            .map(|task| {
                let position = resolver.resolve(task.start, task.end)?;
                debug!(id = %task.id, x1 = position.x1, x2 = position.x2, "resolved task");
                Ok::<_, LayoutError>(position)
            })
            .collect::<Result<Vec<Position>, LayoutError>>()?;

        let header = self.header(&range, &ticks, frame_width, height);
        let today = self.today_marker(&range, &resolver, chart_width, day_width, options.now)?;
        let rows = self.rows(tasks, &positions);

        Ok(ChartLayout {
            width: canvas_width,
            height,
            chart_x: config.padding_x,
            chart_width,
            day_width,
            range,
            ticks,
            header,
            today,
            tasks: rows,
        })
    }

    fn measure_px(&self, text: &str, font: FontId) -> Px {
        self.measure.text_width(text, font) as Px
    }

    fn header(
        &self,
        range: &DateRange,
        ticks: &[Tick],
        frame_width: Px,
        height: Px,
    ) -> TimelineHeader {
        let c = &self.config;
        let top = c.padding_y;
        let baseline = c.header_baseline();
        let rule_top = top + c.header_height;
        let rule_bottom = height - top;
        let tick_top = c.tick_top();

        let mut header = TimelineHeader {
            frame: Rect {
                x: c.padding_x,
                y: top,
                width: frame_width - c.padding_x * 2,
                height: c.header_height,
            },
            ..TimelineHeader::default()
        };

        let first = range.start.format(&c.date_format).to_string();
        let first_width = self.measure_px(&first, FontId::Timeline);
        header.labels.push(TextLabel {
            x: c.padding_x + c.label_inset_x,
            y: baseline,
            text: first,
            font: FontId::Timeline,
        });
        header.grid_lines.push(Line {
            x1: c.padding_x,
            y1: rule_top,
            x2: c.padding_x,
            y2: rule_bottom,
        });

        let last = range.end.format(&c.date_format).to_string();
        let label_stop =
            frame_width - c.padding_x - c.label_inset_x - self.measure_px(&last, FontId::Timeline);
        header.labels.push(TextLabel {
            x: label_stop,
            y: baseline,
            text: last,
            font: FontId::Timeline,
        });
        header.grid_lines.push(Line {
            x1: frame_width - c.padding_x,
            y1: rule_top,
            x2: frame_width - c.padding_x,
            y2: rule_bottom,
        });

        // Ticks in the trailing padding band get no mark
        let mark_limit = frame_width - c.padding_x * 3;
        let mut label_end = first_width + c.label_gap_x;
        for tick in ticks.iter().skip(1).take_while(|t| t.pixel_start < mark_limit) {
            let x = tick.pixel_start;

            if x > label_end + c.padding_x {
                let text = tick.start_date.format(&c.date_format).to_string();
                let text_width = self.measure_px(&text, FontId::Timeline);
                if x + text_width < label_stop {
                    header.labels.push(TextLabel {
                        x: c.padding_x + x - text_width / 2,
                        y: baseline,
                        text,
                        font: FontId::Timeline,
                    });
                }
                label_end = x + text_width;
            }

            header.tick_marks.push(Line {
                x1: c.padding_x + x,
                y1: tick_top,
                x2: c.padding_x + x,
                y2: tick_top - 2 + c.tick_height,
            });
            header.grid_lines.push(Line {
                x1: c.padding_x + x,
                y1: tick_top,
                x2: c.padding_x + x,
                y2: rule_bottom,
            });
        }

        header
    }

    fn today_marker(
        &self,
        range: &DateRange,
        resolver: &PositionResolver<'_>,
        chart_width: Px,
        day_width: Px,
        now: NaiveDateTime,
    ) -> Result<TodayMarker, LayoutError> {
        let c = &self.config;

        let (elapsed, partial) = if now > range.end {
            (chart_width, 0)
        } else if range.contains(now) {
            let position = resolver.resolve(range.start, now - Duration::days(1))?;
            let partial = match now.weekday() {
                Weekday::Sat | Weekday::Sun => 0,
                _ => {
                    let minutes = f64::from(now.hour() * 60 + now.minute());
                    (minutes / 1440.0 * f64::from(day_width)) as Px
                }
            };
            if position.x2 < 0 {
                warn!(%now, x2 = position.x2, "today marker starts left of the chart, clamped");
            }
            (position.x2.max(0), partial)
        } else {
            (0, 0)
        };
        debug!(%now, elapsed, partial, "today marker");

        let y = c.rows_top() - c.padding_y - c.today_height;
        Ok(TodayMarker {
            bar: Rect {
                x: c.padding_x,
                y,
                width: elapsed,
                height: c.today_height,
            },
            partial: Rect {
                x: c.padding_x + elapsed,
                y,
                width: partial,
                height: c.today_height,
            },
        })
    }

    fn rows(&self, tasks: &[Task], positions: &[Position]) -> Vec<TaskLayout> {
        let c = &self.config;
        let mut y = c.rows_top();

        tasks
            .iter()
            .zip(positions)
            .map(|(task, position)| {
                let x1 = c.padding_x + position.x1;
                let milestone = task.is_milestone();

                let title = TextLabel {
                    x: if milestone { x1 - c.milestone_width / 2 } else { x1 },
                    y: y + c.text_height,
                    text: task.label(),
                    font: FontId::Bar,
                };
                y += c.text_height + c.title_gap_y;

                let (shape, right) = if milestone {
                    let shape = TaskShape::Milestone {
                        top: Point { x: x1, y },
                        width: c.milestone_width,
                        height: c.bar_height,
                    };
                    (shape, x1 + c.milestone_width)
                } else {
                    let shape = TaskShape::Bar(Rect {
                        x: x1,
                        y,
                        width: position.width(),
                        height: c.bar_height,
                    });
                    (shape, c.padding_x + position.x2)
                };

                let dates = TextLabel {
                    x: right + c.padding_x,
                    y: y + c.text_height - 3,
                    text: format!(
                        "{} - {}",
                        task.start.format(&c.date_format),
                        task.end.format(&c.date_format)
                    ),
                    font: FontId::Date,
                };
                y += c.bar_height + c.row_gap_y;

                TaskLayout {
                    id: task.id.clone(),
                    title,
                    shape,
                    dates,
                    position: *position,
                }
            })
            .collect()
    }
}

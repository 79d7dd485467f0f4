//! Integration tests for the layout driver

use bizgantt_core::{
    ChartLayout, FontId, LayoutError, Line, Point, Position, Rect, Task, TaskFilter, TaskShape,
};
use bizgantt_layout::{LayoutConfig, LayoutEngine, LayoutOptions};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Seven pixels per character, whatever the font
fn fixed_width(text: &str, _font: FontId) -> u32 {
    text.chars().count() as u32 * 7
}

/// Mon Jan 1 .. Fri Jan 5 2024: a bar, a milestone and a second bar
fn week_tasks() -> Vec<Task> {
    vec![
        Task::new("1", at(1, 1, 8), at(1, 3, 17))
            .title("Design")
            .duration_hours(16),
        Task::new("1.1", at(1, 1, 8), at(1, 1, 8))
            .title("Kickoff")
            .duration_hours(0),
        Task::new("2", at(1, 4, 8), at(1, 5, 17))
            .title("Build")
            .duration_hours(8),
    ]
}

fn lay_out(tasks: &[Task], options: LayoutOptions) -> ChartLayout {
    LayoutEngine::new(fixed_width)
        .layout(tasks, &options)
        .unwrap()
}

#[test]
fn three_tasks_over_one_week() {
    let layout = lay_out(&week_tasks(), LayoutOptions::new(at(1, 3, 12)));

    assert_eq!(layout.range.business_days(), 5);
    assert_eq!(layout.chart_width, 992);
    assert_eq!(layout.day_width, 198);

    let positions: Vec<Position> = layout.tasks.iter().map(|t| t.position).collect();
    assert_eq!(
        positions,
        vec![
            Position { x1: 0, x2: 396 },
            Position { x1: 0, x2: 198 },
            Position { x1: 594, x2: 792 },
        ]
    );

    // increasing start order
    assert!(positions.windows(2).all(|w| w[0].x1 <= w[1].x1));
    // the milestone is a point at its x1, so only the two bars must not overlap
    assert!(positions[0].x2 < positions[2].x1);

    assert_eq!(
        layout.tasks[0].shape,
        TaskShape::Bar(Rect { x: 16, y: 100, width: 396, height: 18 })
    );
    assert_eq!(
        layout.tasks[1].shape,
        TaskShape::Milestone {
            top: Point { x: 16, y: 146 },
            width: 16,
            height: 18,
        }
    );
    assert!(layout.tasks[1].shape.is_milestone());
    assert_eq!(
        layout.tasks[2].shape,
        TaskShape::Bar(Rect { x: 610, y: 192, width: 198, height: 18 })
    );
}

#[test]
fn labels_follow_their_shapes() {
    let layout = lay_out(&week_tasks(), LayoutOptions::new(at(1, 3, 12)));

    let design = &layout.tasks[0];
    assert_eq!(design.title.text, "1 - Design");
    assert_eq!((design.title.x, design.title.y), (16, 96));
    assert_eq!(design.dates.text, "Jan 1 - Jan 3");
    assert_eq!((design.dates.x, design.dates.y), (428, 113));
    assert_eq!(design.dates.font, FontId::Date);

    // milestone titles shift left by half the diamond
    let kickoff = &layout.tasks[1];
    assert_eq!(kickoff.title.x, 8);
    assert_eq!(kickoff.dates.x, 48);
    assert_eq!(kickoff.dates.text, "Jan 1 - Jan 1");
}

#[test]
fn automatic_canvas_size() {
    let layout = lay_out(&week_tasks(), LayoutOptions::new(at(1, 3, 12)));

    // 1024 chart + padding + "May 22 - May 22" at 7px per char
    assert_eq!(layout.width, 1024 + 16 + 105);
    assert_eq!(layout.height, 48 + 48 + 3 * 46);
    assert_eq!(layout.header.frame, Rect { x: 16, y: 16, width: 992, height: 48 });
}

#[test]
fn forced_canvas_size() {
    let options = LayoutOptions::new(at(1, 3, 12)).width(532).height(400);
    let layout = lay_out(&week_tasks(), options);

    assert_eq!(layout.width, 532);
    assert_eq!(layout.height, 400);
    assert_eq!(layout.chart_width, 500);
    assert_eq!(layout.day_width, 100);
}

#[test]
fn header_labels_and_marks() {
    let layout = lay_out(&week_tasks(), LayoutOptions::new(at(1, 3, 12)));
    let header = &layout.header;

    let texts: Vec<&str> = header.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Jan 1", "Jan 6", "Jan 2", "Jan 3", "Jan 4", "Jan 5"]);

    // range end label is right-aligned
    assert_eq!(header.labels[1].x, 1024 - 16 - 3 - 35);
    // tick labels are centred on their tick
    assert_eq!(header.labels[2].x, 16 + 198 - 17);
    assert!(header.labels.iter().all(|l| l.y == 45));

    // the Jan 8 tick at 990px sits in the trailing padding band
    assert_eq!(header.tick_marks.len(), 4);
    assert_eq!(header.tick_marks[0], Line { x1: 214, y1: 51, x2: 214, y2: 61 });
    assert_eq!(header.grid_lines.len(), 6);
    assert_eq!(header.grid_lines[0], Line { x1: 16, y1: 64, x2: 16, y2: 218 });
}

#[test]
fn crowded_tick_labels_are_skipped() {
    let tasks = vec![Task::new("1", at(1, 1, 8), at(1, 26, 17)).duration_hours(160)];
    let layout = lay_out(&tasks, LayoutOptions::new(at(1, 3, 12)).width(432));

    // 20 business days over 400px leaves 20px per tick, narrower than a label
    assert_eq!(layout.day_width, 20);
    let labels = &layout.header.labels;
    assert!(labels.len() < layout.ticks.len());
    for pair in labels[2..].windows(2) {
        assert!(pair[1].x - pair[0].x >= 35, "labels overlap: {:?}", pair);
    }
}

#[test]
fn today_marker_inside_range() {
    let layout = lay_out(&week_tasks(), LayoutOptions::new(at(1, 3, 12)));

    assert_eq!(layout.today.bar, Rect { x: 16, y: 59, width: 198, height: 5 });
    // half of a 198px day has elapsed
    assert_eq!(layout.today.partial, Rect { x: 214, y: 59, width: 99, height: 5 });
}

#[test]
fn today_marker_on_weekend_has_no_partial_day() {
    let saturday = at(1, 6, 10);
    let layout = lay_out(&week_tasks(), LayoutOptions::new(saturday));

    assert_eq!(layout.today.bar.width, 792);
    assert_eq!(layout.today.partial.width, 0);
}

#[test]
fn today_marker_outside_range() {
    let after = lay_out(&week_tasks(), LayoutOptions::new(at(2, 1, 9)));
    assert_eq!(after.today.bar.width, 992);
    assert_eq!(after.today.partial.width, 0);

    let december = NaiveDate::from_ymd_opt(2023, 12, 20)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let before = lay_out(&week_tasks(), LayoutOptions::new(december));
    assert_eq!(before.today.bar.width, 0);
    assert_eq!(before.today.partial.width, 0);
}

#[test]
fn multi_day_ticks_place_tasks_between_boundaries() {
    let tasks = vec![
        Task::new("1", at(1, 1, 8), at(1, 12, 17)).duration_hours(80),
        Task::new("2", at(1, 2, 8), at(1, 3, 17)).duration_hours(16),
    ];
    let options = LayoutOptions::new(at(1, 3, 12)).width(1032).tick_days(2);
    let layout = lay_out(&tasks, options);

    // 10 business days over 1000px
    assert_eq!(layout.day_width, 100);
    assert!(layout.ticks.iter().all(|t| t.business_days == 2));
    // nine business days before the Friday end
    assert_eq!(layout.tasks[0].position, Position { x1: 0, x2: 900 });
    // Tuesday starts inside the first two-day tick
    assert_eq!(layout.tasks[1].position, Position { x1: 0, x2: 100 });
}

#[test]
fn filtered_tasks_are_laid_out_in_input_order() {
    let mut tasks = week_tasks();
    tasks.push(Task::new("2.1", at(1, 4, 8), at(1, 4, 17)).duration_hours(8));

    let kept = TaskFilter::new(2).zoom("2").apply(&tasks);
    let layout = lay_out(&kept, LayoutOptions::new(at(1, 3, 12)));

    let ids: Vec<&str> = layout.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "2.1"]);
    // the range now starts on Thursday
    assert_eq!(layout.tasks[0].position.x1, 0);
    assert_eq!(layout.range.business_days(), 2);
}

#[test]
fn empty_task_list_is_an_error() {
    let err = LayoutEngine::new(fixed_width)
        .layout(&[], &LayoutOptions::new(at(1, 3, 12)))
        .unwrap_err();
    assert_eq!(err, LayoutError::EmptyDataset);
    assert!(!err.is_internal());
}

#[test]
fn too_narrow_canvas_is_an_error() {
    let err = LayoutEngine::new(fixed_width)
        .layout(&week_tasks(), &LayoutOptions::new(at(1, 3, 12)).width(34))
        .unwrap_err();
    assert!(matches!(err, LayoutError::DegenerateScale { width: 2, .. }));
}

#[test]
fn canvas_narrower_than_padding_is_an_error() {
    // 10px minus two 16px paddings leaves a negative chart width
    let err = LayoutEngine::new(fixed_width)
        .layout(&week_tasks(), &LayoutOptions::new(at(1, 3, 12)).width(10))
        .unwrap_err();
    assert_eq!(err, LayoutError::DegenerateScale { width: -22, business_days: 5 });
    assert!(!err.is_internal());
}

#[test]
fn custom_config_changes_geometry() {
    let config = LayoutConfig {
        padding_x: 10,
        bar_height: 30,
        date_format: "%d.%m.".into(),
        ..LayoutConfig::default()
    };
    let engine = LayoutEngine::new(fixed_width).with_config(config);
    assert_eq!(engine.config().padding_x, 10);
    let layout = engine
        .layout(&week_tasks(), &LayoutOptions::new(at(1, 3, 12)).width(1020))
        .unwrap();

    assert_eq!(layout.chart_width, 1000);
    assert_eq!(layout.day_width, 200);
    assert_eq!(layout.tasks[0].dates.text, "01.01. - 03.01.");
    match layout.tasks[0].shape {
        TaskShape::Bar(rect) => assert_eq!((rect.x, rect.height), (10, 30)),
        TaskShape::Milestone { .. } => panic!("expected a bar"),
    }
}

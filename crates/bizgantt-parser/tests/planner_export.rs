//! Integration tests for reading a realistic planner export

use bizgantt_core::TaskFilter;
use bizgantt_parser::{parse_file, parse_tasks, InputParseError};
use std::io::Write;

const EXPORT: &str = r#"ID,Title,Start,End,Duration Hours,Duration,Effort Hours,Effort,Completed,% Complete,Assigned To
1,Discovery,"1/1/24, 8:00 AM","1/3/24, 5:00 PM",24,3d,24,3d,Yes,100%,Ana
1.1,Interviews,"1/1/24, 8:00 AM","1/2/24, 5:00 PM",16,2d,16,2d,Yes,100%,Ana
1.2,Findings ready,"1/3/24, 5:00 PM","1/3/24, 5:00 PM",,0d,,0d,Yes,100%,
2,Build,"1/4/24, 8:00 AM","1/12/24, 5:00 PM",56,7d,80,10d,No,30%,Ben
2.1,Backend,"1/4/24, 8:00 AM","1/10/24, 5:00 PM",40,5d,40,5d,No,40%,Ben
2.1.1,Schema,"1/4/24, 8:00 AM","1/4/24, 5:00 PM",8,1d,8,1d,Yes,100%,Ben
3,Release,"1/12/24, 5:00 PM","1/12/24, 5:00 PM",,0d,,0d,No,0%,
"#;

#[test]
fn reads_every_row_in_order() {
    let tasks = parse_tasks(EXPORT).unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "1.1", "1.2", "2", "2.1", "2.1.1", "3"]);

    let milestones: Vec<&str> = tasks
        .iter()
        .filter(|t| t.is_milestone())
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(milestones, vec!["1.2", "3"]);
}

#[test]
fn default_filter_drops_third_level() {
    let tasks = parse_tasks(EXPORT).unwrap();
    let kept = TaskFilter::default().apply(&tasks);
    assert_eq!(kept.len(), 6);
    assert!(kept.iter().all(|t| t.id != "2.1.1"));
}

#[test]
fn reads_from_disk() {
    let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();

    let tasks = parse_file(file.path()).unwrap();
    assert_eq!(tasks.len(), 7);
    assert_eq!(tasks[3].assigned, "Ben");
    assert_eq!(tasks[3].effort_hours, Some(80));
}

#[test]
fn malformed_effort_aborts_whole_read() {
    let broken = EXPORT.replace("80,10d", "lots,10d");
    let err = parse_tasks(&broken).unwrap_err();
    assert_eq!(err.line(), Some(5));
    assert!(matches!(err, InputParseError::InvalidNumber { field: "Effort Hours", .. }));
}

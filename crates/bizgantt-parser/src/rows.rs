//! Positional CSV row mapping

use crate::InputParseError;
use bizgantt_core::Task;
use chrono::NaiveDateTime;
use std::io::Read;
use tracing::debug;

/// Timestamp layout used by the planner export, e.g. `1/2/06, 3:04 PM`
pub const DATE_FORMAT: &str = "%m/%d/%y, %I:%M %p";

const COL_ID: usize = 0;
const COL_TITLE: usize = 1;
const COL_START: usize = 2;
const COL_END: usize = 3;
const COL_DURATION: usize = 4;
const COL_EFFORT: usize = 6;
const COL_COMPLETED: usize = 8;
const COL_ASSIGNED: usize = 10;

/// Read every data row from `reader`, skipping the header
pub fn read_tasks<R: Read>(reader: R) -> Result<Vec<Task>, InputParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut tasks = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        tasks.push(parse_row(&record, line)?);
    }

    debug!(count = tasks.len(), "read task rows");
    Ok(tasks)
}

/// Map one CSV record onto a [`Task`]
pub fn parse_row(record: &csv::StringRecord, line: u64) -> Result<Task, InputParseError> {
    let field = |index: usize, name: &'static str| {
        record
            .get(index)
            .map(str::trim)
            .ok_or(InputParseError::MissingField { line, field: name })
    };

    let start = parse_date(field(COL_START, "Start")?, line, "Start")?;
    let end = parse_date(field(COL_END, "End")?, line, "End")?;

    let mut task = Task::new(field(COL_ID, "Id")?, start, end).title(field(COL_TITLE, "Title")?);
    task.duration_hours = parse_hours(
        field(COL_DURATION, "Duration Hours")?,
        line,
        "Duration Hours",
    )?;
    task.effort_hours = parse_hours(field(COL_EFFORT, "Effort Hours")?, line, "Effort Hours")?;
    task.completed = field(COL_COMPLETED, "Completed")?.to_string();
    task.assigned = field(COL_ASSIGNED, "Assigned To")?.to_string();

    Ok(task)
}

/// Parse a planner timestamp
pub fn parse_date(
    value: &str,
    line: u64,
    field: &'static str,
) -> Result<NaiveDateTime, InputParseError> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|source| {
        InputParseError::InvalidDate {
            line,
            field,
            value: value.to_string(),
            source,
        }
    })
}

fn parse_hours(
    value: &str,
    line: u64,
    field: &'static str,
) -> Result<Option<i64>, InputParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|source| InputParseError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
            source,
        })
}

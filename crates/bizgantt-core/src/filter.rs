//! Hierarchy depth and zoom filtering

use crate::Task;

/// Selects which tasks make it onto the chart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskFilter {
    /// Deepest id level to keep (1 keeps "1" and "2" but not "1.1")
    pub max_depth: usize,
    /// Keep only this id and its descendants
    pub zoom: Option<String>,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            max_depth: 2,
            zoom: None,
        }
    }
}

impl TaskFilter {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            zoom: None,
        }
    }

    /// Focus on one branch of the hierarchy. An empty prefix clears the zoom.
    pub fn zoom(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.zoom = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Check a single task against depth and zoom
    pub fn retains(&self, task: &Task) -> bool {
        if task.depth() > self.max_depth {
            return false;
        }
        match &self.zoom {
            None => true,
            Some(zoom) => {
                task.id == *zoom
                    || task
                        .id
                        .strip_prefix(zoom.as_str())
                        .is_some_and(|rest| rest.starts_with('.'))
            }
        }
    }

    /// Retained tasks, in input order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.retains(t)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn tasks(ids: &[&str]) -> Vec<Task> {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        ids.iter().map(|id| Task::new(*id, at, at)).collect()
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn depth_limit() {
        let all = tasks(&["1", "1.1", "1.2", "2"]);
        let kept = TaskFilter::new(1).apply(&all);
        assert_eq!(ids(&kept), vec!["1", "2"]);
    }

    #[test]
    fn zoom_keeps_branch() {
        let all = tasks(&["1", "1.1", "1.2", "2"]);
        let kept = TaskFilter::new(2).zoom("1").apply(&all);
        assert_eq!(ids(&kept), vec!["1", "1.1", "1.2"]);
    }

    #[test]
    fn zoom_does_not_match_sibling_prefix() {
        let all = tasks(&["1", "1.1", "10", "10.1", "1.10"]);
        let kept = TaskFilter::new(3).zoom("1").apply(&all);
        assert_eq!(ids(&kept), vec!["1", "1.1", "1.10"]);
    }

    #[test]
    fn zoom_and_depth_combine() {
        let all = tasks(&["1", "1.4", "1.4.1", "1.4.1.2", "1.5"]);
        let kept = TaskFilter::new(3).zoom("1.4").apply(&all);
        assert_eq!(ids(&kept), vec!["1.4", "1.4.1"]);
    }

    #[test]
    fn empty_zoom_means_no_zoom() {
        let filter = TaskFilter::new(2).zoom("");
        assert_eq!(filter.zoom, None);
        assert_eq!(filter.apply(&tasks(&["1", "2.1"])).len(), 2);
    }

    #[test]
    fn input_is_left_untouched() {
        let all = tasks(&["1", "1.1", "2"]);
        let kept = TaskFilter::new(1).apply(&all);
        assert_eq!(all.len(), 3);
        assert_eq!(kept.len(), 2);
    }
}

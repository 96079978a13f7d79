use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single actionable item with a due date and a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, epoch milliseconds at creation (bumped on collision)
    pub id: u64,
    /// Display title, stored as entered
    pub title: String,
    /// Due date, day granularity. Serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Whether the task has been checked off
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new open task with the given id, title, and due date
    pub fn new(id: u64, title: String, date: NaiveDate) -> Self {
        Task {
            id,
            title,
            date,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_open() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let task = Task::new(1, "Standup".to_string(), date);
        assert!(!task.completed);
        assert_eq!(task.date, date);
    }

    #[test]
    fn date_serializes_as_iso_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let task = Task::new(7, "Standup".to_string(), date);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"2024-06-10\""));
    }

    #[test]
    fn completed_defaults_false_when_absent() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Standup","date":"2024-06-10"}"#).unwrap();
        assert!(!task.completed);
    }
}

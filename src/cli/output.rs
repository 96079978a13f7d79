use serde::Serialize;

use crate::model::note::Note;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub count: usize,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct UpcomingJson {
    pub today: Vec<TaskJson>,
    pub tomorrow: Vec<TaskJson>,
    pub this_week: Vec<TaskJson>,
    pub later: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct DayJson {
    pub date: String,
    pub day: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct NoteJson {
    pub id: u64,
    pub title: String,
    pub items: Vec<String>,
    pub color: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct WhoamiJson {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        date: task.date.to_string(),
        completed: task.completed,
    }
}

pub fn tasks_to_json<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskJson> {
    tasks.into_iter().map(task_to_json).collect()
}

pub fn note_to_json(note: &Note) -> NoteJson {
    NoteJson {
        id: note.id,
        title: note.title.clone(),
        items: note.items.clone(),
        color: note.color.clone(),
        created_at: note.created_at.clone(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One task as a checkbox line: `[x] 1718000000000  Standup  (2024-06-10)`
pub fn task_line(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    format!("[{}] {}  {}  ({})", mark, task.id, task.title, task.date)
}

/// Print a list of task lines, or a placeholder when empty
pub fn print_task_lines(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("  (no tasks)");
        return;
    }
    for task in tasks {
        println!("  {}", task_line(task));
    }
}

/// "1 task" / "n tasks"
pub fn task_count(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{n} tasks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn task_line_shows_completion() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut task = Task::new(42, "Standup".to_string(), date);
        assert_eq!(task_line(&task), "[ ] 42  Standup  (2024-06-10)");
        task.completed = true;
        assert_eq!(task_line(&task), "[x] 42  Standup  (2024-06-10)");
    }

    #[test]
    fn task_count_pluralizes() {
        assert_eq!(task_count(1), "1 task");
        assert_eq!(task_count(0), "0 tasks");
        assert_eq!(task_count(3), "3 tasks");
    }
}

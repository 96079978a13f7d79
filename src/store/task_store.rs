use chrono::{NaiveDate, Utc};

use crate::model::task::Task;
use crate::store::storage::Storage;
use crate::store::{load_collection, persist_collection};

/// Storage key for the task collection
pub const TASKS_KEY: &str = "tasks";

/// The authoritative task collection. Views never hold their own copy;
/// they borrow filtered reads from here. Every mutation re-persists the
/// whole collection through the storage port.
pub struct TaskStore<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: Storage> TaskStore<S> {
    /// Open the store over the given storage. An absent key or a
    /// malformed blob loads as an empty collection.
    pub fn open(storage: S) -> Self {
        let tasks = load_collection(&storage, TASKS_KEY);
        TaskStore { storage, tasks }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Add a task due on `date`. A blank title is a no-op returning
    /// None; otherwise the created task is appended, persisted, and
    /// returned.
    pub fn add(&mut self, title: &str, date: NaiveDate) -> Option<&Task> {
        if title.trim().is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, title.to_string(), date));
        self.persist();
        self.tasks.last()
    }

    /// Flip completion on the matching task. An unknown id is a no-op,
    /// but the (unchanged) collection is still persisted.
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        self.persist();
    }

    /// Remove the matching task if present; an unknown id is a no-op
    pub fn remove(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
        self.persist();
    }

    /// Look up a task by id
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks whose due date satisfies the predicate, insertion order
    /// preserved
    pub fn filter_by_date<'a>(
        &'a self,
        predicate: impl Fn(NaiveDate) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| predicate(t.date))
    }

    /// Borrow the underlying storage (tests assert on key presence)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Epoch milliseconds, bumped past the current maximum so ids stay
    /// strictly increasing even within one millisecond or across a
    /// clock step backwards
    fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let floor = self.tasks.iter().map(|t| t.id).max().map_or(0, |m| m + 1);
        now.max(floor)
    }

    fn persist(&mut self) {
        persist_collection(&mut self.storage, TASKS_KEY, &self.tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::MemStorage;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store() -> TaskStore<MemStorage> {
        TaskStore::open(MemStorage::new())
    }

    #[test]
    fn open_over_empty_storage_is_empty() {
        assert!(store().tasks().is_empty());
    }

    #[test]
    fn open_over_malformed_blob_is_empty() {
        let mut storage = MemStorage::new();
        storage.write(TASKS_KEY, "not json {{{").unwrap();
        let store = TaskStore::open(storage);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn add_returns_the_created_task() {
        let mut store = store();
        let task = store.add("Standup", date("2024-06-10")).unwrap();
        assert_eq!(task.title, "Standup");
        assert_eq!(task.date, date("2024-06-10"));
        assert!(!task.completed);
    }

    #[test]
    fn add_blank_title_is_a_noop() {
        let mut store = store();
        assert!(store.add("", date("2024-01-01")).is_none());
        assert!(store.add("   ", date("2024-01-01")).is_none());
        assert!(store.tasks().is_empty());
        assert!(!store.storage().contains(TASKS_KEY));
    }

    #[test]
    fn add_persists_the_collection() {
        let mut store = store();
        store.add("Standup", date("2024-06-10"));
        let raw = store.storage().read(TASKS_KEY).unwrap();
        let persisted: Vec<Task> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.tasks().to_vec());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = store();
        let a = store.add("one", date("2024-06-10")).unwrap().id;
        let b = store.add("two", date("2024-06-10")).unwrap().id;
        let c = store.add("three", date("2024-06-10")).unwrap().id;
        assert!(a < b && b < c);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = store();
        let id = store.add("Standup", date("2024-06-10")).unwrap().id;
        store.toggle(id);
        assert!(store.get(id).unwrap().completed);

        let raw = store.storage().read(TASKS_KEY).unwrap();
        let persisted: Vec<Task> = serde_json::from_str(&raw).unwrap();
        assert!(persisted[0].completed);
    }

    #[test]
    fn toggle_twice_restores_the_flag() {
        let mut store = store();
        let id = store.add("Standup", date("2024-06-10")).unwrap().id;
        store.toggle(id);
        store.toggle(id);
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop_but_still_persists() {
        let mut store = store();
        store.add("Standup", date("2024-06-10"));
        let before = store.tasks().to_vec();
        store.toggle(999);
        assert_eq!(store.tasks(), &before[..]);
        assert!(store.storage().contains(TASKS_KEY));
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = store();
        let id = store.add("Standup", date("2024-06-10")).unwrap().id;
        store.remove(id + 1);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn removing_the_last_task_removes_the_key() {
        let mut store = store();
        let id = store.add("Standup", date("2024-06-10")).unwrap().id;
        assert!(store.storage().contains(TASKS_KEY));
        store.remove(id);
        assert!(store.tasks().is_empty());
        assert!(!store.storage().contains(TASKS_KEY));
    }

    #[test]
    fn filter_by_date_preserves_insertion_order() {
        let mut store = store();
        store.add("b", date("2024-06-12"));
        store.add("a", date("2024-06-10"));
        store.add("c", date("2024-06-12"));
        let titles: Vec<&str> = store
            .filter_by_date(|d| d == date("2024-06-12"))
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn titles_are_stored_untrimmed() {
        let mut store = store();
        let task = store.add("  Standup ", date("2024-06-10")).unwrap();
        assert_eq!(task.title, "  Standup ");
    }
}

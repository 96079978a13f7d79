use chrono::Utc;

use crate::model::note::Note;
use crate::store::storage::Storage;
use crate::store::{load_collection, persist_collection};

/// Storage key for the sticky-note collection
pub const NOTES_KEY: &str = "stickyNotes";

/// The sticky-note board. Same persistence contract as the task store
/// (full rewrite per mutation, key removed when empty, fail-soft load),
/// but notes additionally support edit and delete.
pub struct NoteStore<S: Storage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: Storage> NoteStore<S> {
    pub fn open(storage: S) -> Self {
        let notes = load_collection(&storage, NOTES_KEY);
        NoteStore { storage, notes }
    }

    /// All notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Add a note. A blank title is a no-op returning None. Blank items
    /// are dropped; an all-blank list collapses to a single empty item
    /// so the note still renders with one line.
    pub fn add(&mut self, title: &str, items: Vec<String>) -> Option<&Note> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.next_id();
        let note = Note::new(
            id,
            title.to_string(),
            clean_items(items),
            Utc::now().to_rfc3339(),
        );
        self.notes.push(note);
        self.persist();
        self.notes.last()
    }

    /// Replace a note's title and items, keeping its color and creation
    /// timestamp. Returns false (no-op) for an unknown id or blank title.
    pub fn edit(&mut self, id: u64, title: &str, items: Vec<String>) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.title = title.to_string();
        note.items = clean_items(items);
        self.persist();
        true
    }

    /// Remove the matching note if present; an unknown id is a no-op
    pub fn remove(&mut self, id: u64) {
        self.notes.retain(|n| n.id != id);
        self.persist();
    }

    /// Flip the checked marker on one item of a note
    pub fn toggle_item(&mut self, id: u64, index: usize) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.toggle_item(index);
        }
        self.persist();
    }

    /// Look up a note by id
    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Borrow the underlying storage (tests assert on key presence)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let floor = self.notes.iter().map(|n| n.id).max().map_or(0, |m| m + 1);
        now.max(floor)
    }

    fn persist(&mut self) {
        persist_collection(&mut self.storage, NOTES_KEY, &self.notes);
    }
}

/// Trim items and drop blanks; an empty result becomes one empty item
fn clean_items(items: Vec<String>) -> Vec<String> {
    let cleaned: Vec<String> = items
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();
    if cleaned.is_empty() {
        vec![String::new()]
    } else {
        cleaned
    }
}

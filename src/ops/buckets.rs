use chrono::{Datelike, Days, NaiveDate};
use indexmap::IndexMap;

use crate::model::task::Task;

/// How far ahead the Later bucket reaches by default, in days
pub const DEFAULT_HORIZON_DAYS: u64 = 365;

/// A named date-range partition of the task collection.
///
/// For a fixed `today` the four buckets are pairwise disjoint and cover
/// every date in `today ..= today + horizon`:
///
/// - Today:    date == today
/// - Tomorrow: date == today + 1
/// - ThisWeek: today + 1 < date <= today + 7
/// - Later:    today + 7 < date <= today + horizon
///
/// Past dates and dates beyond the horizon belong to no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Today,
    Tomorrow,
    ThisWeek,
    Later,
}

/// Which bucket a due date falls into, if any
pub fn bucket_for(date: NaiveDate, today: NaiveDate, horizon_days: u64) -> Option<Bucket> {
    let tomorrow = today + Days::new(1);
    let week_end = today + Days::new(7);
    let horizon = today + Days::new(horizon_days);
    if date == today {
        Some(Bucket::Today)
    } else if date == tomorrow {
        Some(Bucket::Tomorrow)
    } else if date > tomorrow && date <= week_end {
        Some(Bucket::ThisWeek)
    } else if date > week_end && date <= horizon {
        Some(Bucket::Later)
    } else {
        None
    }
}

/// Tasks split across the four buckets, insertion order preserved
/// within each
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub today: Vec<&'a Task>,
    pub tomorrow: Vec<&'a Task>,
    pub this_week: Vec<&'a Task>,
    pub later: Vec<&'a Task>,
}

/// Partition tasks into the four buckets for a fixed `today`
pub fn partition<'a>(tasks: &'a [Task], today: NaiveDate, horizon_days: u64) -> Buckets<'a> {
    let mut buckets = Buckets::default();
    for task in tasks {
        match bucket_for(task.date, today, horizon_days) {
            Some(Bucket::Today) => buckets.today.push(task),
            Some(Bucket::Tomorrow) => buckets.tomorrow.push(task),
            Some(Bucket::ThisWeek) => buckets.this_week.push(task),
            Some(Bucket::Later) => buckets.later.push(task),
            None => {}
        }
    }
    buckets
}

/// Monday and Sunday of the week containing `today`
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Days::new(today.weekday().num_days_from_monday() as u64);
    (monday, monday + Days::new(6))
}

/// Seven ordered day slots, Monday first, each holding the tasks due
/// that day. Independent of the four buckets.
pub fn week_grid<'a>(tasks: &'a [Task], today: NaiveDate) -> IndexMap<NaiveDate, Vec<&'a Task>> {
    let (monday, _) = week_bounds(today);
    let mut grid: IndexMap<NaiveDate, Vec<&Task>> = IndexMap::with_capacity(7);
    for offset in 0..7 {
        grid.insert(monday + Days::new(offset), Vec::new());
    }
    for task in tasks {
        if let Some(slot) = grid.get_mut(&task.date) {
            slot.push(task);
        }
    }
    grid
}

/// Tasks due in the month containing `today`, grouped by day in
/// chronological order. Days without tasks are omitted.
pub fn month_grid<'a>(tasks: &'a [Task], today: NaiveDate) -> IndexMap<NaiveDate, Vec<&'a Task>> {
    let mut in_month: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
        .collect();
    in_month.sort_by_key(|t| t.date);

    let mut grid: IndexMap<NaiveDate, Vec<&Task>> = IndexMap::new();
    for task in in_month {
        grid.entry(task.date).or_default().push(task);
    }
    grid
}

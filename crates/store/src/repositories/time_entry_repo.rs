//! Repository for recorded time entries.
//!
//! The running clock itself lives in `buildnote_core::timeclock`; entries it
//! closes (or manual back-entries) land here so other screens can read them.

use buildnote_core::timeclock::{TimeEntry, DAY_MS};
use buildnote_core::types::{DbId, EpochMillis};

use crate::Store;

pub struct TimeEntryRepo;

impl TimeEntryRepo {
    /// Append a recorded span.
    pub async fn add(store: &Store, entry: TimeEntry) {
        tracing::debug!(
            project_id = entry.project_id,
            duration_ms = entry.duration_ms(),
            "Recording time entry"
        );
        store.inner.write().await.time_entries.push(entry);
    }

    /// All recorded spans in record order.
    pub async fn list(store: &Store) -> Vec<TimeEntry> {
        store.inner.read().await.time_entries.clone()
    }

    /// Spans booked against one project.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<TimeEntry> {
        store
            .inner
            .read()
            .await
            .time_entries
            .iter()
            .filter(|e| e.project_id == project_id)
            .copied()
            .collect()
    }

    /// Spans starting within the day beginning at `day_start`.
    pub async fn list_for_day(store: &Store, day_start: EpochMillis) -> Vec<TimeEntry> {
        let end = day_start + DAY_MS;
        store
            .inner
            .read()
            .await
            .time_entries
            .iter()
            .filter(|e| e.start >= day_start && e.start < end)
            .copied()
            .collect()
    }

    /// Remove one previously recorded span. Returns `false` when no
    /// matching entry exists.
    pub async fn delete(store: &Store, entry: &TimeEntry) -> bool {
        let mut tables = store.inner.write().await;
        if let Some(pos) = tables.time_entries.iter().position(|e| e == entry) {
            tables.time_entries.remove(pos);
            true
        } else {
            false
        }
    }
}

//! Time tracking: the running clock, manual back-entries, and day windows.
//!
//! The clock closes the current span whenever the worker switches project or
//! action, or stops the timer — but only spans of at least one minute are
//! recorded, so an accidental double tap never produces a junk entry.
//! Callers pass `now` explicitly; this module never reads the system clock.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, EpochMillis};

/// Minimum recorded span. Anything shorter is discarded as a mis-tap.
pub const MIN_DURATION_MS: EpochMillis = 60_000;

/// Milliseconds per day, for day-window arithmetic.
pub const DAY_MS: EpochMillis = 24 * 60 * 60 * 1000;

/// What the tracked time was spent on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    #[default]
    Work,
    Travel,
    Break,
}

impl ActionType {
    /// Display label (German UI vocabulary).
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Arbeit",
            Self::Travel => "Fahrt",
            Self::Break => "Pause",
        }
    }
}

/// One recorded span of time booked against a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub project_id: DbId,
    pub action: ActionType,
    pub start: EpochMillis,
    pub end: EpochMillis,
}

impl TimeEntry {
    /// Build an entry, rejecting inverted or empty spans.
    pub fn new(
        project_id: DbId,
        action: ActionType,
        start: EpochMillis,
        end: EpochMillis,
    ) -> Result<Self, CoreError> {
        if end <= start {
            return Err(CoreError::Validation(
                "time entry end must be after start".into(),
            ));
        }
        Ok(Self {
            project_id,
            action,
            start,
            end,
        })
    }

    pub fn duration_ms(&self) -> EpochMillis {
        self.end - self.start
    }
}

/// Midnight (UTC) of the day containing `ts`.
pub fn start_of_day(ts: EpochMillis) -> EpochMillis {
    ts - ts.rem_euclid(DAY_MS)
}

/// The time-tracking state for one worker session.
///
/// Holds the running timer, the recorded entries, and the day selected for
/// review. Switching project or action while the timer runs closes the
/// current span against the *previous* selection and restarts the timer.
#[derive(Debug, Clone)]
pub struct TimeClock {
    project_id: Option<DbId>,
    action: ActionType,
    running: bool,
    started_at: EpochMillis,
    entries: Vec<TimeEntry>,
    selected_day_start: EpochMillis,
}

impl TimeClock {
    pub fn new(now: EpochMillis) -> Self {
        Self {
            project_id: None,
            action: ActionType::Work,
            running: false,
            started_at: 0,
            entries: Vec::new(),
            selected_day_start: start_of_day(now),
        }
    }

    pub fn project_id(&self) -> Option<DbId> {
        self.project_id
    }

    pub fn action(&self) -> ActionType {
        self.action
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Close the running span against the current selection if it is long
    /// enough, then restart the timer at `now`.
    fn roll_over(&mut self, now: EpochMillis) {
        if let Some(project_id) = self.project_id {
            if now - self.started_at >= MIN_DURATION_MS {
                self.entries.push(TimeEntry {
                    project_id,
                    action: self.action,
                    start: self.started_at,
                    end: now,
                });
            }
        }
        self.started_at = now;
    }

    /// Switch the tracked project. A running span is closed first.
    pub fn select_project(&mut self, project_id: DbId, now: EpochMillis) {
        if self.running {
            self.roll_over(now);
        }
        self.project_id = Some(project_id);
    }

    /// Switch the tracked action. A running span is closed first.
    pub fn select_action(&mut self, action: ActionType, now: EpochMillis) {
        if self.running {
            self.roll_over(now);
        }
        self.action = action;
    }

    /// Start or stop the timer. Stopping records the span when it meets the
    /// minimum duration.
    pub fn toggle(&mut self, now: EpochMillis) {
        if self.running {
            self.roll_over(now);
            self.running = false;
        } else {
            self.started_at = now;
            self.running = true;
        }
    }

    /// Whether `start..end` overlaps any entry of the selected day.
    pub fn overlaps(&self, start: EpochMillis, end: EpochMillis) -> bool {
        self.entries_for_selected_day()
            .iter()
            .any(|e| e.start < end && e.end > start)
    }

    /// Add a manually back-entered span.
    ///
    /// Rejects inverted spans and spans overlapping an existing entry of the
    /// selected day.
    pub fn add_manual(&mut self, entry: TimeEntry) -> Result<(), CoreError> {
        if entry.end <= entry.start {
            return Err(CoreError::Validation(
                "time entry end must be after start".into(),
            ));
        }
        if self.overlaps(entry.start, entry.end) {
            return Err(CoreError::Conflict(
                "time entry overlaps an existing entry".into(),
            ));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove a previously recorded entry. Returns `false` when no matching
    /// entry exists.
    pub fn delete(&mut self, entry: &TimeEntry) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e == entry) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    // -- day navigation --

    pub fn selected_day_start(&self) -> EpochMillis {
        self.selected_day_start
    }

    pub fn prev_day(&mut self) {
        self.selected_day_start -= DAY_MS;
    }

    /// Advance the selected day, never beyond today.
    pub fn next_day(&mut self, now: EpochMillis) {
        if self.selected_day_start + DAY_MS <= start_of_day(now) {
            self.selected_day_start += DAY_MS;
        }
    }

    /// Entries starting within the selected day.
    pub fn entries_for_selected_day(&self) -> Vec<TimeEntry> {
        let start = self.selected_day_start;
        let end = start + DAY_MS;
        self.entries
            .iter()
            .filter(|e| e.start >= start && e.start < end)
            .copied()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

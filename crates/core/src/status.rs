//! Status requests: date-window selection and working-day counts.
//!
//! Status updates (vacation, sick leave, on-site blocks) carry a date window
//! in the backend's `dd.MM.yyyy` format. The helpers here pick the update
//! covering a given day and count working days for a requested range.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CoreError;

/// Wire date format used by the status endpoints.
const WIRE_DATE_FORMAT: &str = "%d.%m.%Y";

/// A status window reported for a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Free-text kind, e.g. `"Urlaub"` or `"Krank"`.
    pub kind: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl StatusUpdate {
    /// Parse a status update from wire-format date strings.
    pub fn from_wire(kind: impl Into<String>, from: &str, to: &str) -> Result<Self, CoreError> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT)
                .map_err(|e| CoreError::Validation(format!("invalid status date {s:?}: {e}")))
        };
        Ok(Self {
            kind: kind.into(),
            from: parse(from)?,
            to: parse(to)?,
        })
    }

    /// Whether `day` falls inside the window (inclusive on both ends).
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }
}

/// The first update whose window covers `today`, if any.
pub fn current_update(updates: &[StatusUpdate], today: NaiveDate) -> Option<&StatusUpdate> {
    updates.iter().find(|u| u.covers(today))
}

/// Count working days (Monday through Friday) in `from..=to`.
///
/// An inverted range counts as zero.
pub fn working_days(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut day = from;
    let mut count = 0;
    while day <= to {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Measurement ("Aufmaß") records: entry types, type inference, and totals.
//!
//! A record carries three entry collections but only the one selected by
//! [`MeasurementType`] is meaningful. Records are composed in place through
//! [`MeasurementDraft`] while the worker enters dimensions, then frozen into
//! a [`MeasurementRecord`] for submission.

use serde::{Deserialize, Serialize};

use crate::types::DbId;
use crate::units::{AreaUnit, LengthUnit, RoomUnit};

/// Which entry collection of a record is meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeasurementType {
    #[default]
    Length,
    Area,
    Room,
}

impl MeasurementType {
    /// Match an explicit type tag against the known German/English synonyms.
    ///
    /// Returns `None` for blank or unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "length" | "länge" | "laenge" | "len" | "l" => Some(Self::Length),
            "area" | "fläche" | "flaeche" | "a" | "fl" => Some(Self::Area),
            "room" | "raum" | "r" => Some(Self::Room),
            _ => None,
        }
    }

    /// Display label (the trade vocabulary is German).
    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "Länge",
            Self::Area => "Fläche",
            Self::Room => "Raum",
        }
    }
}

/// One length measurement with an optional deduction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthEntry {
    #[serde(default)]
    pub description: String,
    pub length: Option<f64>,
    #[serde(default)]
    pub include_deduction: bool,
    pub deduction_length: Option<f64>,
}

/// One area measurement (length × width) with an optional deduction area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaEntry {
    #[serde(default)]
    pub description: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    #[serde(default)]
    pub include_deduction: bool,
    pub deduction_length: Option<f64>,
    pub deduction_width: Option<f64>,
}

/// One room measurement (length × width × height) with an optional
/// deduction volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomEntry {
    #[serde(default)]
    pub description: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(default)]
    pub include_deduction: bool,
    pub deduction_length: Option<f64>,
    pub deduction_width: Option<f64>,
    pub deduction_height: Option<f64>,
}

/// A complete measurement record as exchanged with the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub total: f64,
    pub measurement_type: MeasurementType,
    #[serde(default)]
    pub length_unit: LengthUnit,
    #[serde(default)]
    pub area_unit: AreaUnit,
    #[serde(default)]
    pub room_unit: RoomUnit,
    #[serde(default)]
    pub length_entries: Vec<LengthEntry>,
    #[serde(default)]
    pub area_entries: Vec<AreaEntry>,
    #[serde(default)]
    pub room_entries: Vec<RoomEntry>,
    pub project_id: DbId,
    pub user_id: DbId,
}

impl MeasurementRecord {
    /// Recompute the scalar total for the record's selected type.
    pub fn compute_total(&self) -> f64 {
        match self.measurement_type {
            MeasurementType::Length => total_length(&self.length_entries),
            MeasurementType::Area => total_area(&self.area_entries),
            MeasurementType::Room => total_room(&self.room_entries),
        }
    }
}

/// Decide the measurement type when the explicit tag may be missing or
/// unrecognized.
///
/// Tag synonyms win; otherwise the first non-empty entry collection decides,
/// checked in the order length, area, room. With no tag and no entries the
/// result is [`MeasurementType::Length`] — an explicit policy default, not a
/// business rule.
pub fn infer_type(
    tag: &str,
    length_entries: &[LengthEntry],
    area_entries: &[AreaEntry],
    room_entries: &[RoomEntry],
) -> MeasurementType {
    if let Some(t) = MeasurementType::from_tag(tag) {
        return t;
    }
    if !length_entries.is_empty() {
        MeasurementType::Length
    } else if !area_entries.is_empty() {
        MeasurementType::Area
    } else if !room_entries.is_empty() {
        MeasurementType::Room
    } else {
        MeasurementType::Length
    }
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------
//
// Absent dimensions count as zero; deductions apply only when the entry's
// flag is set. Per-entry partials are deliberately not clamped at zero: an
// over-deduction yields a negative contribution. No rounding and no unit
// conversion happen here; the total is in whatever unit the record selected.

/// Total of a length entry list: Σ length − deduction.
pub fn total_length(entries: &[LengthEntry]) -> f64 {
    entries
        .iter()
        .map(|e| {
            let deduction = if e.include_deduction {
                e.deduction_length.unwrap_or(0.0)
            } else {
                0.0
            };
            e.length.unwrap_or(0.0) - deduction
        })
        .sum()
}

/// Total of an area entry list: Σ l·w − dl·dw.
pub fn total_area(entries: &[AreaEntry]) -> f64 {
    entries
        .iter()
        .map(|e| {
            let base = e.length.unwrap_or(0.0) * e.width.unwrap_or(0.0);
            let deduction = if e.include_deduction {
                e.deduction_length.unwrap_or(0.0) * e.deduction_width.unwrap_or(0.0)
            } else {
                0.0
            };
            base - deduction
        })
        .sum()
}

/// Total of a room entry list: Σ l·w·h − dl·dw·dh.
pub fn total_room(entries: &[RoomEntry]) -> f64 {
    entries
        .iter()
        .map(|e| {
            let base =
                e.length.unwrap_or(0.0) * e.width.unwrap_or(0.0) * e.height.unwrap_or(0.0);
            let deduction = if e.include_deduction {
                e.deduction_length.unwrap_or(0.0)
                    * e.deduction_width.unwrap_or(0.0)
                    * e.deduction_height.unwrap_or(0.0)
            } else {
                0.0
            };
            base - deduction
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Draft composition
// ---------------------------------------------------------------------------

/// A measurement being composed on the device before submission.
///
/// Mirrors the entry form: the worker picks a type and units, appends
/// entries one by one, and watches the running total. [`into_record`]
/// freezes the draft with the total computed from the selected type.
///
/// [`into_record`]: MeasurementDraft::into_record
#[derive(Debug, Clone, Default)]
pub struct MeasurementDraft {
    pub name: String,
    pub description: String,
    pub notes: String,
    pub measurement_type: MeasurementType,
    pub length_unit: LengthUnit,
    pub area_unit: AreaUnit,
    pub room_unit: RoomUnit,
    pub length_entries: Vec<LengthEntry>,
    pub area_entries: Vec<AreaEntry>,
    pub room_entries: Vec<RoomEntry>,
}

impl MeasurementDraft {
    pub fn add_length_entry(&mut self, entry: LengthEntry) {
        self.length_entries.push(entry);
    }

    pub fn add_area_entry(&mut self, entry: AreaEntry) {
        self.area_entries.push(entry);
    }

    pub fn add_room_entry(&mut self, entry: RoomEntry) {
        self.room_entries.push(entry);
    }

    /// Running total for the currently selected type.
    pub fn running_total(&self) -> f64 {
        match self.measurement_type {
            MeasurementType::Length => total_length(&self.length_entries),
            MeasurementType::Area => total_area(&self.area_entries),
            MeasurementType::Room => total_room(&self.room_entries),
        }
    }

    /// Freeze the draft into a submittable record for `project_id`.
    pub fn into_record(self, project_id: DbId, user_id: DbId) -> MeasurementRecord {
        let mut record = MeasurementRecord {
            name: self.name,
            description: self.description,
            notes: self.notes,
            total: 0.0,
            measurement_type: self.measurement_type,
            length_unit: self.length_unit,
            area_unit: self.area_unit,
            room_unit: self.room_unit,
            length_entries: self.length_entries,
            area_entries: self.area_entries,
            room_entries: self.room_entries,
            project_id,
            user_id,
        };
        record.total = record.compute_total();
        record
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn length(l: f64, include: bool, deduction: Option<f64>) -> LengthEntry {
        LengthEntry {
            description: String::new(),
            length: Some(l),
            include_deduction: include,
            deduction_length: deduction,
        }
    }

    // -- totals --

    #[test]
    fn length_total_respects_deduction_flag() {
        // 10 - 3 + 5 = 12; the second entry's deduction is ignored.
        let entries = vec![length(10.0, true, Some(3.0)), length(5.0, false, Some(100.0))];
        assert_eq!(total_length(&entries), 12.0);
    }

    #[test]
    fn length_total_treats_missing_length_as_zero() {
        let entries = vec![LengthEntry::default(), length(4.0, false, None)];
        assert_eq!(total_length(&entries), 4.0);
    }

    #[test]
    fn length_total_is_not_clamped_per_entry() {
        // Over-deduction contributes negatively.
        let entries = vec![length(2.0, true, Some(5.0)), length(10.0, false, None)];
        assert_eq!(total_length(&entries), 7.0);
    }

    #[test]
    fn area_total_subtracts_deduction_rectangle() {
        let entry = AreaEntry {
            description: String::new(),
            length: Some(4.0),
            width: Some(3.0),
            include_deduction: true,
            deduction_length: Some(1.0),
            deduction_width: Some(1.0),
        };
        assert_eq!(total_area(&[entry]), 11.0);
    }

    #[test]
    fn area_total_ignores_deduction_when_flag_unset() {
        let entry = AreaEntry {
            description: String::new(),
            length: Some(4.0),
            width: Some(3.0),
            include_deduction: false,
            deduction_length: Some(1.0),
            deduction_width: Some(1.0),
        };
        assert_eq!(total_area(&[entry]), 12.0);
    }

    #[test]
    fn room_total_multiplies_three_dimensions() {
        let entry = RoomEntry {
            description: String::new(),
            length: Some(2.0),
            width: Some(3.0),
            height: Some(2.5),
            include_deduction: true,
            deduction_length: Some(1.0),
            deduction_width: Some(1.0),
            deduction_height: Some(2.0),
        };
        assert_eq!(total_room(&[entry]), 13.0);
    }

    #[test]
    fn room_total_with_missing_height_is_zero() {
        let entry = RoomEntry {
            length: Some(2.0),
            width: Some(3.0),
            ..RoomEntry::default()
        };
        assert_eq!(total_room(&[entry]), 0.0);
    }

    // -- type tags and inference --

    #[test]
    fn tag_synonyms_cover_german_and_english() {
        assert_eq!(MeasurementType::from_tag("Länge"), Some(MeasurementType::Length));
        assert_eq!(MeasurementType::from_tag("laenge"), Some(MeasurementType::Length));
        assert_eq!(MeasurementType::from_tag("AREA"), Some(MeasurementType::Area));
        assert_eq!(MeasurementType::from_tag("fl"), Some(MeasurementType::Area));
        assert_eq!(MeasurementType::from_tag("raum"), Some(MeasurementType::Room));
        assert_eq!(MeasurementType::from_tag("r"), Some(MeasurementType::Room));
        assert_eq!(MeasurementType::from_tag(""), None);
        assert_eq!(MeasurementType::from_tag("volume"), None);
    }

    #[test]
    fn inference_prefers_explicit_tag_over_entries() {
        let areas = vec![AreaEntry::default()];
        assert_eq!(infer_type("raum", &[], &areas, &[]), MeasurementType::Room);
    }

    #[test]
    fn inference_uses_only_nonempty_collection() {
        let areas = vec![AreaEntry::default()];
        assert_eq!(infer_type("", &[], &areas, &[]), MeasurementType::Area);

        let rooms = vec![RoomEntry::default()];
        assert_eq!(infer_type("", &[], &[], &rooms), MeasurementType::Room);
    }

    #[test]
    fn inference_defaults_to_length_when_everything_is_empty() {
        assert_eq!(infer_type("", &[], &[], &[]), MeasurementType::Length);
    }

    #[test]
    fn inference_checks_length_first() {
        let lengths = vec![LengthEntry::default()];
        let areas = vec![AreaEntry::default()];
        assert_eq!(infer_type("", &lengths, &areas, &[]), MeasurementType::Length);
    }

    // -- draft --

    #[test]
    fn draft_running_total_follows_selected_type() {
        let mut draft = MeasurementDraft {
            measurement_type: MeasurementType::Area,
            ..MeasurementDraft::default()
        };
        draft.add_area_entry(AreaEntry {
            length: Some(4.0),
            width: Some(2.0),
            ..AreaEntry::default()
        });
        // A stray length entry does not affect the area total.
        draft.add_length_entry(length(99.0, false, None));
        assert_eq!(draft.running_total(), 8.0);
    }

    #[test]
    fn draft_freezes_into_record_with_computed_total() {
        let mut draft = MeasurementDraft {
            name: "Wand Süd".into(),
            ..MeasurementDraft::default()
        };
        draft.add_length_entry(length(10.0, true, Some(3.0)));
        draft.add_length_entry(length(5.0, false, Some(100.0)));

        let record = draft.into_record(7, 1);
        assert_eq!(record.project_id, 7);
        assert_eq!(record.measurement_type, MeasurementType::Length);
        assert_eq!(record.total, 12.0);
    }

    // -- serde wire shape --

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = MeasurementRecord {
            name: "Decke".into(),
            measurement_type: MeasurementType::Area,
            project_id: 3,
            user_id: 1,
            ..MeasurementRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["measurementType"], "AREA");
        assert_eq!(value["projectId"], 3);
        assert!(value["lengthEntries"].is_array());
    }
}

//! Wire-row mappers: loosely-typed backend JSON → domain records.
//!
//! The backend sends `zip` and `city` as separate fields (the zip sometimes
//! as a string), dates as ISO `createdDate`, and room-entry dimensions under
//! German names on older rows. Everything funnels through the tolerant
//! coercion helpers in `buildnote_core::decode`, so a single odd field never
//! sinks a row.

use chrono::NaiveDate;
use serde_json::Value;

use buildnote_core::decode::{
    self, bool_of, coerce_f64, coerce_f64_any, coerce_i32, coerce_i64, string_of, string_of_any,
    DecodeError,
};
use buildnote_core::measurement::{
    infer_type, AreaEntry, LengthEntry, MeasurementRecord, RoomEntry,
};
use buildnote_core::model::{Appointment, Material, Project};
use buildnote_core::types::{DbId, EpochMillis};
use buildnote_core::units::{AreaUnit, LengthUnit, RoomUnit};

/// Convert an ISO `yyyy-MM-dd` date to epoch millis at UTC midnight.
///
/// Blank or unparseable dates fall back to `fallback` (the caller's "now"),
/// matching the original client's behavior for rows without a creation date.
fn iso_date_to_millis(raw: &str, fallback: EpochMillis) -> EpochMillis {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(fallback)
}

/// Map one project wire row. `now` backs rows without a `createdDate`.
pub fn project_row(obj: &Value, now: EpochMillis) -> Project {
    let zip = coerce_i32(obj, "zip", 0);
    let city = string_of(obj, "city");
    let city_zip = if zip != 0 {
        format!("{zip} {city}").trim().to_string()
    } else {
        city.trim().to_string()
    };

    Project {
        id: coerce_i64(obj, "id", 0),
        name: string_of(obj, "name"),
        street: string_of(obj, "street"),
        city_zip,
        additional_info: string_of(obj, "additionalInfo"),
        description: string_of(obj, "description"),
        created_at: iso_date_to_millis(&string_of(obj, "createdDate"), now),
        customer_id: coerce_i64(obj, "customerId", 0),
    }
}

/// Decode a project list payload (array or single object).
pub fn decode_projects(raw: &str, now: EpochMillis) -> Result<Vec<Project>, DecodeError> {
    decode::decode_list(raw, |o| Some(project_row(o, now)))
}

/// Map one material wire row.
pub fn material_row(obj: &Value) -> Material {
    Material {
        name: string_of(obj, "name"),
        number: coerce_i32(obj, "number", 0),
        unit: string_of(obj, "unit"),
        project_id: coerce_i64(obj, "projectId", 0),
        price: coerce_f64(obj, "price"),
    }
}

/// Decode a material list payload.
pub fn decode_materials(raw: &str) -> Result<Vec<Material>, DecodeError> {
    decode::decode_list(raw, |o| Some(material_row(o)))
}

fn length_entry_row(obj: &Value) -> LengthEntry {
    let deduction = coerce_f64(obj, "deductionLength");
    // Older rows omit the flag; a recorded deduction implies it.
    let include = bool_of(obj, "includeDeduction", deduction.unwrap_or(0.0) > 0.0);
    LengthEntry {
        description: string_of(obj, "description"),
        length: coerce_f64(obj, "length"),
        include_deduction: include,
        deduction_length: deduction,
    }
}

fn area_entry_row(obj: &Value) -> AreaEntry {
    let dl = coerce_f64(obj, "deductionLength");
    let dw = coerce_f64(obj, "deductionWidth");
    let include = bool_of(
        obj,
        "includeDeduction",
        dl.unwrap_or(0.0) > 0.0 || dw.unwrap_or(0.0) > 0.0,
    );
    AreaEntry {
        description: string_of(obj, "description"),
        length: coerce_f64(obj, "length"),
        width: coerce_f64(obj, "width"),
        include_deduction: include,
        deduction_length: dl,
        deduction_width: dw,
    }
}

fn room_entry_row(obj: &Value) -> RoomEntry {
    // Room rows predate the English field names; accept both spellings.
    let dl = coerce_f64_any(obj, &["abzugLaenge", "deductionLength"]);
    let dw = coerce_f64_any(obj, &["abzugBreite", "deductionWidth"]);
    let dh = coerce_f64_any(obj, &["abzugHoehe", "deductionHeight"]);
    let include = bool_of(
        obj,
        "includeAbzug",
        dl.unwrap_or(0.0) > 0.0 || dw.unwrap_or(0.0) > 0.0 || dh.unwrap_or(0.0) > 0.0,
    );
    RoomEntry {
        description: string_of_any(obj, &["raumbezeichnung", "roomName", "description"]),
        length: coerce_f64_any(obj, &["laenge", "length"]),
        width: coerce_f64_any(obj, &["breite", "width"]),
        height: coerce_f64_any(obj, &["hoehe", "height"]),
        include_deduction: include,
        deduction_length: dl,
        deduction_width: dw,
        deduction_height: dh,
    }
}

fn entry_objects(obj: &Value, key: &str) -> Vec<Value> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter(|v| v.is_object()).cloned().collect())
        .unwrap_or_default()
}

/// Map one measurement wire row for `project_id`.
///
/// The type tag is matched leniently; rows without a usable tag are typed
/// from whichever entry collection is populated (length first, then area,
/// then room).
pub fn measurement_row(obj: &Value, project_id: DbId) -> MeasurementRecord {
    let length_entries: Vec<LengthEntry> = entry_objects(obj, "lengthEntries")
        .iter()
        .map(length_entry_row)
        .collect();
    let area_entries: Vec<AreaEntry> = entry_objects(obj, "areaEntries")
        .iter()
        .map(area_entry_row)
        .collect();
    let room_entries: Vec<RoomEntry> = entry_objects(obj, "roomEntries")
        .iter()
        .map(room_entry_row)
        .collect();

    let measurement_type = infer_type(
        &string_of(obj, "measurementType"),
        &length_entries,
        &area_entries,
        &room_entries,
    );

    MeasurementRecord {
        name: string_of(obj, "name"),
        description: string_of(obj, "description"),
        notes: string_of(obj, "notes"),
        total: coerce_f64(obj, "total").unwrap_or(0.0),
        measurement_type,
        length_unit: LengthUnit::from_raw(&string_of(obj, "lengthUnit")),
        area_unit: AreaUnit::from_raw(&string_of(obj, "areaUnit")),
        room_unit: RoomUnit::from_raw(&string_of(obj, "roomUnit")),
        length_entries,
        area_entries,
        room_entries,
        project_id,
        user_id: coerce_i64(obj, "userId", 1),
    }
}

/// Decode a measurement list payload for one project.
pub fn decode_measurements(
    raw: &str,
    project_id: DbId,
) -> Result<Vec<MeasurementRecord>, DecodeError> {
    decode::decode_list(raw, |o| Some(measurement_row(o, project_id)))
}

/// Map one appointment wire row.
pub fn appointment_row(obj: &Value) -> Appointment {
    let employee_ids = obj
        .get("employeeIds")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();

    let color = match string_of(obj, "color") {
        s if s.is_empty() => None,
        s => Some(s),
    };

    Appointment {
        id: coerce_i64(obj, "id", 0),
        name: string_of(obj, "name"),
        date: string_of(obj, "date"),
        start_time: string_of(obj, "startTime"),
        end_time: string_of(obj, "endTime"),
        notes: string_of(obj, "notes"),
        color,
        project_id: coerce_i64(obj, "projectId", 0),
        employee_ids,
    }
}

/// Decode an appointment list payload.
pub fn decode_appointments(raw: &str) -> Result<Vec<Appointment>, DecodeError> {
    decode::decode_list(raw, |o| Some(appointment_row(o)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

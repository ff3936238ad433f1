//! Handlers for the `/measurement_record` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use buildnote_core::measurement::{
    infer_type, AreaEntry, LengthEntry, MeasurementRecord, RoomEntry,
};
use buildnote_core::types::DbId;
use buildnote_core::units::{AreaUnit, LengthUnit, RoomUnit};
use buildnote_store::repositories::{MeasurementRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for POST /api/measurement_record/create.
///
/// The client only transmits the unit and entry list matching the record's
/// type; the type tag and units arrive as free strings (display labels like
/// `m²` included) and go through the normalization tables.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurementRecord {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub measurement_type: String,
    #[serde(default)]
    pub length_unit: String,
    #[serde(default)]
    pub area_unit: String,
    #[serde(default)]
    pub room_unit: String,
    #[serde(default)]
    pub length_entries: Vec<LengthEntry>,
    #[serde(default)]
    pub area_entries: Vec<AreaEntry>,
    #[serde(default)]
    pub room_entries: Vec<RoomEntry>,
    pub project_id: DbId,
    #[serde(default = "default_user_id")]
    pub user_id: DbId,
}

fn default_user_id() -> DbId {
    1
}

/// GET /api/measurement_record/getByProject/{id}
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<MeasurementRecord>>> {
    let records = MeasurementRepo::list_by_project(&state.store, project_id).await;
    Ok(Json(records))
}

/// POST /api/measurement_record/create
///
/// Echoes the stored record with status 201. The referenced project must
/// exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMeasurementRecord>,
) -> AppResult<(StatusCode, Json<MeasurementRecord>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    ProjectRepo::find_by_id(&state.store, input.project_id).await?;

    let measurement_type = infer_type(
        &input.measurement_type,
        &input.length_entries,
        &input.area_entries,
        &input.room_entries,
    );

    let record = MeasurementRecord {
        name: input.name,
        description: input.description,
        notes: input.notes,
        total: input.total,
        measurement_type,
        length_unit: LengthUnit::from_raw(&input.length_unit),
        area_unit: AreaUnit::from_raw(&input.area_unit),
        room_unit: RoomUnit::from_raw(&input.room_unit),
        length_entries: input.length_entries,
        area_entries: input.area_entries,
        room_entries: input.room_entries,
        project_id: input.project_id,
        user_id: input.user_id,
    };
    MeasurementRepo::add(&state.store, record.clone()).await;

    Ok((StatusCode::CREATED, Json(record)))
}

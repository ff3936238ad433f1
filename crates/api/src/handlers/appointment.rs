//! Handler for the appointment lookup endpoint.
//!
//! The hosted backend exposes this one directly under the `/api` prefix as
//! `getByDateAndEmployee`, not nested under a resource path. The route is
//! kept verbatim so the client works against both backends unchanged.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use buildnote_core::model::Appointment;
use buildnote_core::types::DbId;
use buildnote_store::repositories::AppointmentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for GET /api/getByDateAndEmployee.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByDateAndEmployee {
    /// ISO `yyyy-MM-dd` day.
    pub date: String,
    pub employee_id: DbId,
}

/// GET /api/getByDateAndEmployee?date={date}&employeeId={id}
pub async fn by_date_and_employee(
    State(state): State<AppState>,
    Query(query): Query<ByDateAndEmployee>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = AppointmentRepo::list(&state.store)
        .await
        .into_iter()
        .filter(|a| a.date == query.date && a.employee_ids.contains(&query.employee_id))
        .collect();
    Ok(Json(appointments))
}

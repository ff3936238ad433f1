//! Handlers for the `/material` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use buildnote_core::model::Material;
use buildnote_core::types::DbId;
use buildnote_store::repositories::{MaterialRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for POST /api/material.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub unit: String,
    pub project_id: DbId,
    pub price: Option<f64>,
}

/// GET /api/material/project/{id}
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Material>>> {
    let materials = MaterialRepo::list_by_project(&state.store, project_id).await;
    Ok(Json(materials))
}

/// POST /api/material
///
/// Echoes the stored row with status 201. The referenced project must exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    ProjectRepo::find_by_id(&state.store, input.project_id).await?;

    let material = Material {
        name: input.name,
        number: input.number,
        unit: input.unit,
        project_id: input.project_id,
        price: input.price,
    };
    MaterialRepo::add(&state.store, material.clone()).await;

    Ok((StatusCode::CREATED, Json(material)))
}

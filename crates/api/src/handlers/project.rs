//! Handlers for the `/project` resource.
//!
//! The wire format predates the mobile client: postal code and city travel
//! as separate fields (`zip`, `city`) and the creation date as an ISO
//! `createdDate` string, while the dataset stores the combined `city_zip`
//! and epoch millis. The serializer here splits them back apart.

use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use serde::Serialize;

use buildnote_core::model::Project;
use buildnote_core::types::DbId;
use buildnote_store::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// One project row as the backend transmits it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProject {
    pub id: DbId,
    pub name: String,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<i32>,
    pub city: String,
    pub additional_info: String,
    pub description: String,
    pub created_date: String,
}

impl From<Project> for WireProject {
    fn from(project: Project) -> Self {
        let (zip, city) = split_city_zip(&project.city_zip);
        let created_date = DateTime::from_timestamp_millis(project.created_at)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Self {
            id: project.id,
            name: project.name,
            street: project.street,
            zip,
            city,
            additional_info: project.additional_info,
            description: project.description,
            created_date,
        }
    }
}

/// Split a combined `"12345 Musterstadt"` string into its wire fields.
/// Without a numeric prefix the whole string is the city.
fn split_city_zip(city_zip: &str) -> (Option<i32>, String) {
    if let Some((head, rest)) = city_zip.split_once(' ') {
        if let Ok(zip) = head.parse::<i32>() {
            return (Some(zip), rest.trim().to_string());
        }
    }
    (None, city_zip.trim().to_string())
}

/// GET /api/project
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WireProject>>> {
    let projects = ProjectRepo::list(&state.store).await;
    Ok(Json(projects.into_iter().map(WireProject::from).collect()))
}

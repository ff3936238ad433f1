//! REST API client for the buildnote backend endpoints.
//!
//! Wraps the documented endpoint set (projects, materials, measurement
//! records, appointments) using [`reqwest`]. Response bodies go through the
//! tolerant mappers in [`crate::dto`] rather than strict deserialization,
//! since production payloads mix numeric and string encodings per field.

use std::time::Duration;

use buildnote_core::measurement::{MeasurementRecord, MeasurementType};
use buildnote_core::model::{Appointment, Material, Project};
use buildnote_core::types::{DbId, EpochMillis};

use crate::config::ClientConfig;
use crate::dto;
use crate::error::ApiError;

/// HTTP client for one buildnote backend.
pub struct BuildnoteApi {
    client: reqwest::Client,
    base_url: String,
}

impl BuildnoteApi {
    /// Create a new API client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch all projects visible to the signed-in user.
    ///
    /// Sends `GET /project`. Rows without a `createdDate` get `now` as
    /// their creation timestamp.
    pub async fn list_projects(&self, now: EpochMillis) -> Result<Vec<Project>, ApiError> {
        let raw = self.get_text(&format!("{}/project", self.base_url)).await?;
        Ok(dto::decode_projects(&raw, now)?)
    }

    /// Fetch the material list for one project.
    ///
    /// Sends `GET /material/project/{id}`.
    pub async fn materials_for_project(&self, project_id: DbId) -> Result<Vec<Material>, ApiError> {
        let raw = self
            .get_text(&format!("{}/material/project/{}", self.base_url, project_id))
            .await?;
        Ok(dto::decode_materials(&raw)?)
    }

    /// Create a material on the backend and return the stored row.
    ///
    /// Sends `POST /material`.
    pub async fn create_material(&self, material: &Material) -> Result<Material, ApiError> {
        let response = self
            .client
            .post(format!("{}/material", self.base_url))
            .json(material)
            .send()
            .await?;

        let raw = Self::ensure_success(response).await?.text().await?;
        dto::decode_materials(&raw)?
            .into_iter()
            .next()
            .ok_or(ApiError::UnexpectedShape("material"))
    }

    /// Fetch all measurement records for one project.
    ///
    /// Sends `GET /measurement_record/getByProject/{id}`. The project id is
    /// stamped onto every decoded record; the backend does not echo it.
    pub async fn measurements_for_project(
        &self,
        project_id: DbId,
    ) -> Result<Vec<MeasurementRecord>, ApiError> {
        let raw = self
            .get_text(&format!(
                "{}/measurement_record/getByProject/{}",
                self.base_url, project_id
            ))
            .await?;
        Ok(dto::decode_measurements(&raw, project_id)?)
    }

    /// Create a measurement record on the backend.
    ///
    /// Sends `POST /measurement_record/create`. Only the entry list and unit
    /// matching the record's selected type are transmitted; the other two
    /// collections stay client-side.
    pub async fn create_measurement(&self, record: &MeasurementRecord) -> Result<(), ApiError> {
        let mut fields = serde_json::Map::new();
        fields.insert("name".into(), serde_json::json!(record.name));
        fields.insert("description".into(), serde_json::json!(record.description));
        fields.insert("notes".into(), serde_json::json!(record.notes));
        fields.insert("total".into(), serde_json::json!(record.total));
        fields.insert(
            "measurementType".into(),
            serde_json::json!(record.measurement_type),
        );
        fields.insert("projectId".into(), serde_json::json!(record.project_id));
        fields.insert("userId".into(), serde_json::json!(record.user_id));

        match record.measurement_type {
            MeasurementType::Length => {
                fields.insert(
                    "lengthUnit".into(),
                    serde_json::json!(record.length_unit.label()),
                );
                fields.insert(
                    "lengthEntries".into(),
                    serde_json::json!(record.length_entries),
                );
            }
            MeasurementType::Area => {
                fields.insert("areaUnit".into(), serde_json::json!(record.area_unit.label()));
                fields.insert("areaEntries".into(), serde_json::json!(record.area_entries));
            }
            MeasurementType::Room => {
                fields.insert("roomUnit".into(), serde_json::json!(record.room_unit.label()));
                fields.insert("roomEntries".into(), serde_json::json!(record.room_entries));
            }
        }

        let response = self
            .client
            .post(format!("{}/measurement_record/create", self.base_url))
            .json(&serde_json::Value::Object(fields))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Fetch the appointments for one employee on one day.
    ///
    /// Sends `GET /getByDateAndEmployee?date={date}&employeeId={id}` with
    /// the date in ISO `yyyy-MM-dd` form.
    pub async fn appointments_by_date_and_employee(
        &self,
        date: &str,
        employee_id: DbId,
    ) -> Result<Vec<Appointment>, ApiError> {
        let response = self
            .client
            .get(format!("{}/getByDateAndEmployee", self.base_url))
            .query(&[("date", date), ("employeeId", &employee_id.to_string())])
            .send()
            .await?;

        let raw = Self::ensure_success(response).await?.text().await?;
        Ok(dto::decode_appointments(&raw)?)
    }

    // ---- private helpers ----

    /// Issue a GET request and return the body text of a 2xx response.
    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Ok(Self::ensure_success(response).await?.text().await?)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Status`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Backend returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

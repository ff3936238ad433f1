//! Repository for per-project measurement records.

use buildnote_core::measurement::MeasurementRecord;
use buildnote_core::types::DbId;

use crate::Store;

pub struct MeasurementRepo;

impl MeasurementRepo {
    /// Replace the cached records of one project with a fresh server result.
    pub async fn replace_for_project(
        store: &Store,
        project_id: DbId,
        records: Vec<MeasurementRecord>,
    ) {
        let mut tables = store.inner.write().await;
        tables.measurements.retain(|m| m.project_id != project_id);
        tables.measurements.extend(records);
    }

    /// Measurement records of one project, in insertion order.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<MeasurementRecord> {
        store
            .inner
            .read()
            .await
            .measurements
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Append a record the server confirmed (the create response).
    pub async fn add(store: &Store, record: MeasurementRecord) {
        store.inner.write().await.measurements.push(record);
    }
}

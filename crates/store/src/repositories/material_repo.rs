//! Repository for per-project material lists.

use buildnote_core::model::Material;
use buildnote_core::types::DbId;

use crate::Store;

pub struct MaterialRepo;

impl MaterialRepo {
    /// Replace the cached materials of one project with a fresh server
    /// result. Materials of other projects are untouched.
    pub async fn replace_for_project(store: &Store, project_id: DbId, materials: Vec<Material>) {
        let mut tables = store.inner.write().await;
        tables.materials.retain(|m| m.project_id != project_id);
        tables.materials.extend(materials);
    }

    /// Materials booked against one project, in insertion order.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<Material> {
        store
            .inner
            .read()
            .await
            .materials
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Append a material the server confirmed (the POST response row).
    pub async fn add(store: &Store, material: Material) {
        store.inner.write().await.materials.push(material);
    }
}

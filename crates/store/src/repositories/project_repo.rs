//! Repository for the cached project list.

use buildnote_core::model::{filter_sorted, Project, ProjectSortMode};
use buildnote_core::types::DbId;

use crate::{Store, StoreError};

/// Read access and cache replacement for projects.
///
/// Projects are created server-side; the client only caches the list a load
/// returned, so there is no create/update path here.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Replace the cached list with a fresh server result.
    pub async fn replace_all(store: &Store, projects: Vec<Project>) {
        tracing::debug!(count = projects.len(), "Replacing cached project list");
        let mut tables = store.inner.write().await;
        tables.projects = projects;
    }

    /// All cached projects in load order.
    pub async fn list(store: &Store) -> Vec<Project> {
        store.inner.read().await.projects.clone()
    }

    /// Look up one project by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Project, StoreError> {
        store
            .inner
            .read()
            .await
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    /// Filtered and sorted view for the project list screen.
    pub async fn search(store: &Store, query: &str, mode: ProjectSortMode) -> Vec<Project> {
        filter_sorted(&store.inner.read().await.projects, query, mode)
    }
}

//! Repository for project-scoped document entries.

use buildnote_core::model::DocumentEntry;
use buildnote_core::types::{DbId, EpochMillis};

use crate::Store;

pub struct DocumentRepo;

impl DocumentRepo {
    /// Documents of one project in upload order.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<DocumentEntry> {
        store
            .inner
            .read()
            .await
            .documents
            .iter()
            .filter(|d| d.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Register picked URIs for a project. Each entry's display name is the
    /// last path segment of its URI.
    pub async fn add_uris(
        store: &Store,
        project_id: DbId,
        uris: Vec<String>,
        added_at: EpochMillis,
    ) {
        let mut tables = store.inner.write().await;
        for uri in uris {
            let name = DocumentEntry::name_from_uri(&uri);
            tables.documents.push(DocumentEntry {
                project_id,
                name,
                uri,
                added_at,
            });
        }
    }
}

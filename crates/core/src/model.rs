//! Domain records shared across features.
//!
//! These are the client-side canonical shapes. Wire rows differ in places
//! (the backend sends `zip`/`city` separately and an ISO `createdDate`);
//! the mappers in `buildnote-client` bridge the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DbId, EpochMillis};

/// A construction project. Created server-side; the client only reads and
/// caches the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub street: String,
    /// Combined postal code and city, e.g. `"63329 Egelsbach"`.
    pub city_zip: String,
    pub additional_info: String,
    pub description: String,
    pub created_at: EpochMillis,
    pub customer_id: DbId,
}

/// Sort order for the project list screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSortMode {
    #[default]
    NewestFirst,
    OldestFirst,
    Alphabetical,
}

/// Filter projects by a case-insensitive name substring, then sort.
pub fn filter_sorted(
    projects: &[Project],
    query: &str,
    mode: ProjectSortMode,
) -> Vec<Project> {
    let query = query.to_lowercase();
    let mut out: Vec<Project> = projects
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .cloned()
        .collect();
    match mode {
        ProjectSortMode::NewestFirst => out.sort_by_key(|p| std::cmp::Reverse(p.created_at)),
        ProjectSortMode::OldestFirst => out.sort_by_key(|p| p.created_at),
        ProjectSortMode::Alphabetical => out.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    out
}

/// The customer a project is carried out for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A material booked against a project. Created client-side via a form and
/// POSTed; the server is the system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    /// Quantity. The field is called `number` on the wire.
    pub number: i32,
    pub unit: String,
    pub project_id: DbId,
    /// Unit price; only newer server versions send it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A calendar appointment for a field worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: DbId,
    pub name: String,
    /// ISO date (`yyyy-MM-dd`).
    pub date: String,
    /// `"HH:MM"`.
    pub start_time: String,
    /// `"HH:MM"`.
    pub end_time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub project_id: DbId,
    #[serde(default)]
    pub employee_ids: Vec<DbId>,
}

/// A project-scoped chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub project_id: DbId,
    pub sender_name: String,
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Whether the local user authored the message.
    pub mine: bool,
    pub sent_at: EpochMillis,
}

impl ChatMessage {
    pub fn outgoing(
        project_id: DbId,
        sender_name: impl Into<String>,
        text: impl Into<String>,
        attachments: Vec<String>,
        sent_at: EpochMillis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            sender_name: sender_name.into(),
            text: text.into(),
            attachments,
            mine: true,
            sent_at,
        }
    }
}

/// A document attached to a project (URI into device or remote storage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    pub project_id: DbId,
    pub name: String,
    pub uri: String,
    pub added_at: EpochMillis,
}

impl DocumentEntry {
    /// Display name for a document URI: the last path segment, or a
    /// placeholder when the URI has none.
    pub fn name_from_uri(uri: &str) -> String {
        uri.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("Dokument")
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

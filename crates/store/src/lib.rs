//! Client-side state for the buildnote companion.
//!
//! The original app kept its authoritative collections inside view models
//! with no backing store. Here that state is an explicit, injectable
//! [`Store`]: in-memory tables behind per-feature repositories, so a screen,
//! a sync service, or a test all talk to the same narrow interface. Nothing
//! is persisted; process memory is the documented lifetime of this data.
//!
//! All cross-entity references use numeric ids. The name-keyed lookups of
//! some historical variants were a known defect and were not carried over.

pub mod repositories;

use std::sync::Arc;

use tokio::sync::RwLock;

use buildnote_core::measurement::MeasurementRecord;
use buildnote_core::model::{Appointment, ChatMessage, Customer, DocumentEntry, Material, Project};
use buildnote_core::timeclock::TimeEntry;
use buildnote_core::types::DbId;

/// Errors from the state layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

#[derive(Default)]
pub(crate) struct Tables {
    pub projects: Vec<Project>,
    pub customers: Vec<Customer>,
    pub materials: Vec<Material>,
    pub measurements: Vec<MeasurementRecord>,
    pub appointments: Vec<Appointment>,
    pub messages: Vec<ChatMessage>,
    pub documents: Vec<DocumentEntry>,
    pub time_entries: Vec<TimeEntry>,
}

/// Shared in-memory state. Cheaply cloneable; clones share the same tables.
#[derive(Clone, Default)]
pub struct Store {
    pub(crate) inner: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

//! Repository for the cached appointment list.

use buildnote_core::model::Appointment;
use buildnote_core::types::DbId;

use crate::Store;

pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Replace the cache with the result of a by-date-and-employee fetch.
    pub async fn replace_all(store: &Store, appointments: Vec<Appointment>) {
        let mut tables = store.inner.write().await;
        tables.appointments = appointments;
    }

    /// All cached appointments in server order.
    pub async fn list(store: &Store) -> Vec<Appointment> {
        store.inner.read().await.appointments.clone()
    }

    /// Appointments belonging to one project.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<Appointment> {
        store
            .inner
            .read()
            .await
            .appointments
            .iter()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: DbId, project_id: DbId) -> Appointment {
        Appointment {
            id,
            name: "Kick-off".into(),
            date: "2026-08-26".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            notes: String::new(),
            color: None,
            project_id,
            employee_ids: vec![1],
        }
    }

    #[tokio::test]
    async fn list_by_project_filters_on_id() {
        let store = Store::new();
        AppointmentRepo::replace_all(&store, vec![appointment(1, 10), appointment(2, 20)]).await;

        assert_eq!(AppointmentRepo::list(&store).await.len(), 2);
        let scoped = AppointmentRepo::list_by_project(&store, 10).await;
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, 1);
    }
}

//! Repository for the cached customer list.

use buildnote_core::model::Customer;
use buildnote_core::types::DbId;

use crate::{Store, StoreError};

pub struct CustomerRepo;

impl CustomerRepo {
    /// Replace the cached list with a fresh server result.
    pub async fn replace_all(store: &Store, customers: Vec<Customer>) {
        let mut tables = store.inner.write().await;
        tables.customers = customers;
    }

    /// Look up one customer by id, e.g. the owner of a selected project.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Customer, StoreError> {
        store
            .inner
            .read()
            .await
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "Customer",
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn find_by_id_returns_cached_customer() {
        let store = Store::new();
        CustomerRepo::replace_all(
            &store,
            vec![Customer {
                id: 1,
                name: "Max Mustermann".into(),
                email: "max@example.com".into(),
                phone: "+49 170 1234567".into(),
            }],
        )
        .await;

        assert_eq!(CustomerRepo::find_by_id(&store, 1).await.unwrap().name, "Max Mustermann");
        assert_matches!(
            CustomerRepo::find_by_id(&store, 2).await,
            Err(StoreError::NotFound { entity: "Customer", id: 2 })
        );
    }
}

//! Repository for project-scoped chat messages.

use buildnote_core::model::ChatMessage;
use buildnote_core::types::{DbId, EpochMillis};

use crate::Store;

pub struct ChatRepo;

impl ChatRepo {
    /// Messages of one project in send order.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<ChatMessage> {
        store
            .inner
            .read()
            .await
            .messages
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Append an outgoing message and return the stored copy.
    pub async fn send(
        store: &Store,
        project_id: DbId,
        sender_name: &str,
        text: &str,
        attachments: Vec<String>,
        sent_at: EpochMillis,
    ) -> ChatMessage {
        let message = ChatMessage::outgoing(project_id, sender_name, text, attachments, sent_at);
        store.inner.write().await.messages.push(message.clone());
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sent_messages_are_scoped_and_marked_mine() {
        let store = Store::new();
        ChatRepo::send(&store, 1, "Du", "Anfahrt 8 Uhr", vec![], 100).await;
        ChatRepo::send(&store, 2, "Du", "Material fehlt", vec!["file:///foto1.jpg".into()], 200)
            .await;

        let for_one = ChatRepo::list_by_project(&store, 1).await;
        assert_eq!(for_one.len(), 1);
        assert!(for_one[0].mine);
        assert_eq!(for_one[0].text, "Anfahrt 8 Uhr");

        let for_two = ChatRepo::list_by_project(&store, 2).await;
        assert_eq!(for_two[0].attachments.len(), 1);
    }
}

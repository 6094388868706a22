use tracing::{debug, info};

use crate::{
    entities::message::{Inbox, Message, NewMessage},
    errors::AppError,
    repositories::message::MessageRepository,
};

fn message_not_found() -> AppError {
    AppError::NotFound("Message not found".to_string())
}

pub struct MessageHandler<R>
where
    R: MessageRepository,
{
    pub message_repo: R,
}

impl<R> MessageHandler<R>
where
    R: MessageRepository,
{
    pub fn new(message_repo: R) -> Self {
        MessageHandler { message_repo }
    }

    /// Stores a message sent through the contact form
    pub async fn create_message(&self, message: NewMessage) -> Result<Message, AppError> {
        let created = self.message_repo.create_message(&message).await?;
        info!(message_id = created.id, user_id = created.user_id, "Message received");

        Ok(created)
    }

    pub async fn get_messages(&self, user_id: i32) -> Result<Vec<Message>, AppError> {
        self.message_repo.get_messages(user_id).await
    }

    /// Messages addressed to a user together with how many are still unread
    pub async fn get_inbox(&self, user_id: i32) -> Result<Inbox, AppError> {
        let messages = self.message_repo.get_messages(user_id).await?;
        let unread = self.message_repo.count_unread_messages(user_id).await?;

        Ok(Inbox { messages, unread })
    }

    pub async fn get_message(&self, id: i32) -> Result<Message, AppError> {
        self.message_repo
            .get_message(id)
            .await?
            .ok_or_else(message_not_found)
    }

    /// Marks a message as read. Repeating the call is harmless.
    pub async fn mark_message_as_read(&self, id: i32) -> Result<Message, AppError> {
        let message = self.message_repo
            .mark_message_as_read(id)
            .await?
            .ok_or_else(message_not_found)?;
        debug!(message_id = id, "Message marked as read");

        Ok(message)
    }

    pub async fn delete_message(&self, id: i32) -> Result<(), AppError> {
        match self.message_repo.delete_message(id).await? {
            true => Ok(()),
            false => Err(message_not_found()),
        }
    }
}

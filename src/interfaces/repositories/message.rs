use async_trait::async_trait;
use validator::Validate;

use crate::{
    entities::message::{Message, NewMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn get_messages(&self, user_id: i32) -> Result<Vec<Message>, AppError>;
    async fn get_message(&self, id: i32) -> Result<Option<Message>, AppError>;
    async fn create_message(&self, message: &NewMessage) -> Result<Message, AppError>;
    /// Idempotent; `None` when the message does not exist
    async fn mark_message_as_read(&self, id: i32) -> Result<Option<Message>, AppError>;
    async fn count_unread_messages(&self, user_id: i32) -> Result<i64, AppError>;
    async fn delete_message(&self, id: i32) -> Result<bool, AppError>;
}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn get_messages(&self, user_id: i32) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"SELECT * FROM messages WHERE user_id = $1 ORDER BY id"#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn get_message(&self, id: i32) -> Result<Option<Message>, AppError> {
        let message = sqlx::query_as::<_, Message>(r#"SELECT * FROM messages WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(message)
    }

    async fn create_message(&self, message: &NewMessage) -> Result<Message, AppError> {
        message.validate()?;

        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (user_id, name, email, message_content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(message.user_id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message_content)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn mark_message_as_read(&self, id: i32) -> Result<Option<Message>, AppError> {
        let message = sqlx::query_as::<_, Message>(
            r#"UPDATE messages SET is_read = TRUE WHERE id = $1 RETURNING *"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    async fn count_unread_messages(&self, user_id: i32) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM messages WHERE user_id = $1 AND is_read = FALSE"#
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn delete_message(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(r#"DELETE FROM messages WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

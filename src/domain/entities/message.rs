use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

/// Contact-form message addressed to a site owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub message_content: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// `Unread` is initial, `Read` is terminal. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[display("unread")]
    Unread,
    #[display("read")]
    Read,
}

impl Message {
    pub fn status(&self) -> MessageStatus {
        if self.is_read {
            MessageStatus::Read
        } else {
            MessageStatus::Unread
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inbox {
    pub messages: Vec<Message>,
    pub unread: i64,
}

/// `isRead` is not writable; new messages always start unread.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMessage {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,

    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Name cannot be empty")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(max = 5000, message = "Message must be at most 5000 characters"),
        custom(function = "validate_not_blank", message = "Message cannot be empty")
    )]
    pub message_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::validation::parse_input;
    use serde_json::json;

    fn message(is_read: bool) -> Message {
        Message {
            id: 1,
            user_id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message_content: "Hello".into(),
            created_at: Utc::now(),
            is_read,
        }
    }

    #[test]
    fn status_follows_is_read() {
        assert_eq!(message(false).status(), MessageStatus::Unread);
        assert_eq!(message(true).status(), MessageStatus::Read);
        assert_eq!(MessageStatus::Read.to_string(), "read");
    }

    #[test]
    fn is_read_cannot_be_supplied_by_callers() {
        let err = parse_input::<NewMessage>(json!({
            "userId": 1,
            "name": "Ada",
            "email": "ada@example.com",
            "messageContent": "Hello",
            "isRead": true
        }))
        .unwrap_err();

        assert_eq!(err.field_errors()[0].field, "isRead");
    }

    #[test]
    fn email_must_be_valid() {
        let err = parse_input::<NewMessage>(json!({
            "userId": 1,
            "name": "Ada",
            "email": "not-an-email",
            "messageContent": "Hello"
        }))
        .unwrap_err();

        assert_eq!(err.field_errors()[0].field, "email");
        assert_eq!(err.field_errors()[0].message, "Invalid email format");
    }

    #[test]
    fn serializes_is_read_in_camel_case() {
        let json = serde_json::to_value(message(false)).unwrap();
        assert_eq!(json["isRead"], false);
        assert_eq!(json["messageContent"], "Hello");
    }
}

use std::borrow::Cow;
use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

// PostgreSQL SQLSTATE codes we classify
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    ConstraintError(String),
    UniquenessError(String),
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::ConstraintError(msg) => write!(f, "Constraint violation: {}", msg),
            AppError::UniquenessError(msg) => write!(f, "Already exists: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            // Store details stay in the logs
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                serde_json::json!({"error": "Internal server error"})
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConstraintError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UniquenessError(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Single-field validation failure.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }])
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AppError::ValidationError(errors) => errors,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = Vec::new();
        collect_field_errors(None, &errors, &mut field_errors);
        // HashMap order is unstable, keep reports deterministic
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationError(field_errors)
    }
}

fn collect_field_errors(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        // Report the wire (camelCase) name rather than the Rust field name
        let name = camel_case(field);
        let path = match prefix {
            Some(p) => format!("{}.{}", p, name),
            None => name,
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError {
                    field: path.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(Some(path.as_str()), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}[{}]", path, index);
                    collect_field_errors(Some(item_path.as_str()), nested, out);
                }
            }
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed(UNIQUE_VIOLATION)) => {
                AppError::UniquenessError(
                    e.constraint()
                        .map(|c| format!("duplicate value violates {}", c))
                        .unwrap_or_else(|| "duplicate value".into())
                )
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed(FOREIGN_KEY_VIOLATION)) => {
                AppError::ConstraintError(
                    e.constraint()
                        .map(|c| format!("foreign key violation on {}", c))
                        .unwrap_or_else(|| "foreign key violation".into())
                )
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed(NOT_NULL_VIOLATION))
                || e.code() == Some(Cow::Borrowed(CHECK_VIOLATION)) =>
            {
                AppError::invalid_field(
                    e.constraint().unwrap_or("record"),
                    e.message().to_string(),
                )
            }
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(AppError::invalid_field("title", "empty").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::ConstraintError("fk".into()).status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::UniquenessError("username".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound("Project".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::InternalError("boom".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_are_flattened_and_sorted() {
        let mut errors = ValidationErrors::new();
        let mut title = ValidationError::new("length");
        title.message = Some("Title cannot be empty".into());
        errors.add("title", title);
        errors.add("tech_stack", ValidationError::new("custom"));

        let err = AppError::from(errors);
        let fields = err.field_errors();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "techStack");
        assert_eq!(fields[0].message, "Invalid value");
        assert_eq!(fields[1].field, "title");
        assert_eq!(fields[1].message, "Title cannot be empty");
    }

    #[test]
    fn camel_case_matches_wire_names() {
        assert_eq!(camel_case("message_content"), "messageContent");
        assert_eq!(camel_case("user_id"), "userId");
        assert_eq!(camel_case("title"), "title");
    }

    #[test]
    fn display_lists_offending_fields() {
        let err = AppError::invalid_field("username", "Username cannot be empty");
        assert_eq!(err.to_string(), "validation error: username:Username cannot be empty");
    }

    #[test]
    fn row_not_found_is_an_internal_error() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::InternalError(_)));
    }
}

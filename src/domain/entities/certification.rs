use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{
    option_fields::PatchString,
    validation::{
        validate_link_target, validate_not_blank, validate_optional_link_target,
        validate_optional_text,
    },
};

// ───── Database Models ───────────────────────────────────────────────

/// `completion_date` and `duration` are free text ("March 2024", "6 weeks"),
/// not structured dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub platform: String,
    pub description: String,
    pub pdf_path: Option<String>,
    pub image_path: Option<String>,
    pub icon_name: Option<String>,
    pub completion_date: Option<String>,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CertificationCredential {
    pub id: i32,
    pub certification_id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub credential_type: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationDetails {
    #[serde(flatten)]
    pub certification: Certification,
    pub credentials: Vec<CertificationCredential>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCertification {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,

    #[validate(custom(function = "validate_not_blank", message = "Title cannot be empty"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "Platform cannot be empty"))]
    pub platform: String,

    #[validate(custom(function = "validate_not_blank", message = "Description cannot be empty"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_link_target"))]
    pub pdf_path: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_link_target"))]
    pub image_path: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Icon name cannot be blank"))]
    pub icon_name: Option<String>,

    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "Completion date cannot be blank"),
        length(max = 64, message = "Completion date must be at most 64 characters")
    )]
    pub completion_date: Option<String>,

    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "Duration cannot be blank"),
        length(max = 64, message = "Duration must be at most 64 characters")
    )]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCertification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank", message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank", message = "Platform cannot be empty"))]
    pub platform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank", message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    #[validate(custom(function = "validate_optional_link_target"))]
    pub pdf_path: PatchString,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    #[validate(custom(function = "validate_optional_link_target"))]
    pub image_path: PatchString,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    #[validate(custom(function = "validate_optional_text", message = "Icon name cannot be blank"))]
    pub icon_name: PatchString,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    #[validate(custom(function = "validate_optional_text", message = "Completion date cannot be blank"))]
    pub completion_date: PatchString,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    #[validate(custom(function = "validate_optional_text", message = "Duration cannot be blank"))]
    pub duration: PatchString,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCertificationCredential {
    #[validate(range(min = 1, message = "certificationId must be a positive id"))]
    pub certification_id: i32,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_not_blank", message = "Credential type cannot be empty"))]
    pub credential_type: String,

    #[validate(custom(function = "validate_not_blank", message = "Credential value cannot be empty"))]
    pub value: String,
}

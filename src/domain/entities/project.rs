use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{
    option_fields::PatchString,
    validation::{
        validate_link_target, validate_not_blank, validate_optional_text, validate_tech_stack,
    },
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub tech_stack: Vec<String>,
    pub icon_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub id: i32,
    pub project_id: i32,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

/// A project together with the media and links shown in its detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<ProjectImage>,
    pub links: Vec<ProjectLink>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProject {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,

    #[validate(custom(function = "validate_not_blank", message = "Title cannot be empty"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "Short description cannot be empty"))]
    pub short_description: String,

    #[validate(custom(function = "validate_not_blank", message = "Full description cannot be empty"))]
    pub full_description: String,

    #[validate(custom(function = "validate_tech_stack"))]
    pub tech_stack: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Icon name cannot be blank"))]
    pub icon_name: Option<String>,
}

/// Partial update. Absent fields keep their stored value; `iconName: null`
/// clears the icon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank", message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank", message = "Short description cannot be empty"))]
    pub short_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank", message = "Full description cannot be empty"))]
    pub full_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_tech_stack"))]
    pub tech_stack: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    #[validate(custom(function = "validate_optional_text", message = "Icon name cannot be blank"))]
    pub icon_name: PatchString,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProjectImage {
    #[validate(range(min = 1, message = "projectId must be a positive id"))]
    pub project_id: i32,

    #[validate(custom(function = "validate_link_target"))]
    pub image_url: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Alt text must be at most 255 characters"))]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProjectLink {
    #[validate(range(min = 1, message = "projectId must be a positive id"))]
    pub project_id: i32,

    #[validate(custom(function = "validate_not_blank", message = "Link title cannot be empty"))]
    pub title: String,

    #[validate(custom(function = "validate_link_target"))]
    pub url: String,
}

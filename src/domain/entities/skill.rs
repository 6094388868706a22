use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: i32,
    pub user_id: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A category with the skills listed under it, as rendered in the skills
/// section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryWithSkills {
    #[serde(flatten)]
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewSkillCategory {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,

    #[validate(
        length(max = 100, message = "Category must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Category cannot be empty")
    )]
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSkillCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(max = 100, message = "Category must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Category cannot be empty")
    )]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewSkill {
    #[validate(range(min = 1, message = "categoryId must be a positive id"))]
    pub category_id: i32,

    #[validate(
        length(max = 100, message = "Skill name must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Skill name cannot be empty")
    )]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::validation::parse_input;
    use serde_json::json;

    #[test]
    fn skill_requires_a_category_and_a_name() {
        let skill: NewSkill = parse_input(json!({"categoryId": 2, "name": "Rust"})).unwrap();
        assert_eq!(skill.name, "Rust");

        let err = parse_input::<NewSkill>(json!({"categoryId": 2, "name": ""})).unwrap_err();
        assert_eq!(err.field_errors()[0].field, "name");
        assert_eq!(err.field_errors()[0].message, "Skill name cannot be empty");

        let err = parse_input::<NewSkill>(json!({"name": "Rust"})).unwrap_err();
        assert_eq!(err.field_errors()[0].field, "categoryId");
    }

    #[test]
    fn category_patch_is_partial() {
        let patch: UpdateSkillCategory = parse_input(json!({})).unwrap();
        assert!(patch.category.is_none());
        assert!(patch.user_id.is_none());

        let patch: UpdateSkillCategory = parse_input(json!({"category": "Languages"})).unwrap();
        assert_eq!(patch.category.as_deref(), Some("Languages"));
    }

    #[test]
    fn category_label_length_is_bounded() {
        let long = "x".repeat(101);
        assert!(parse_input::<NewSkillCategory>(json!({"userId": 1, "category": long})).is_err());
    }
}

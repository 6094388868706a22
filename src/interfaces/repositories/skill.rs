use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use validator::Validate;

use crate::{
    entities::skill::{NewSkill, NewSkillCategory, Skill, SkillCategory, UpdateSkillCategory},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn get_skill_categories(&self, user_id: i32) -> Result<Vec<SkillCategory>, AppError>;
    async fn get_skill_category(&self, id: i32) -> Result<Option<SkillCategory>, AppError>;
    async fn create_skill_category(&self, category: &NewSkillCategory) -> Result<SkillCategory, AppError>;
    async fn update_skill_category(&self, id: i32, patch: &UpdateSkillCategory) -> Result<Option<SkillCategory>, AppError>;
    async fn delete_skill_category(&self, id: i32) -> Result<bool, AppError>;

    async fn get_skills(&self, category_id: i32) -> Result<Vec<Skill>, AppError>;
    /// Every skill under any of `user_id`'s categories, grouped by category
    async fn get_skills_for_user(&self, user_id: i32) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: i32) -> Result<bool, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn get_skill_categories(&self, user_id: i32) -> Result<Vec<SkillCategory>, AppError> {
        let categories = sqlx::query_as::<_, SkillCategory>(
            "SELECT * FROM skill_categories WHERE user_id = $1 ORDER BY id"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_skill_category(&self, id: i32) -> Result<Option<SkillCategory>, AppError> {
        let category = sqlx::query_as::<_, SkillCategory>(
            "SELECT * FROM skill_categories WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn create_skill_category(&self, category: &NewSkillCategory) -> Result<SkillCategory, AppError> {
        category.validate()?;

        let created = sqlx::query_as::<_, SkillCategory>(
            r#"
            INSERT INTO skill_categories (user_id, category)
            VALUES ($1, $2)
            RETURNING *
            "#
        )
        .bind(category.user_id)
        .bind(&category.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_skill_category(&self, id: i32, patch: &UpdateSkillCategory) -> Result<Option<SkillCategory>, AppError> {
        patch.validate()?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE skill_categories SET updated_at = NOW()");

        if let Some(user_id) = patch.user_id {
            builder.push(", user_id = ").push_bind(user_id);
        }
        if let Some(category) = &patch.category {
            builder.push(", category = ").push_bind(category.clone());
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<SkillCategory>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_skill_category(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM skill_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_skills(&self, category_id: i32) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills WHERE category_id = $1 ORDER BY id"
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn get_skills_for_user(&self, user_id: i32) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT s.*
            FROM skills s
            JOIN skill_categories c ON c.id = s.category_id
            WHERE c.user_id = $1
            ORDER BY s.category_id, s.id
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError> {
        skill.validate()?;

        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (category_id, name)
            VALUES ($1, $2)
            RETURNING *
            "#
        )
        .bind(skill.category_id)
        .bind(&skill.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_skill(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

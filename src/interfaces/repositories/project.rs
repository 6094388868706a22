use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use validator::Validate;

use crate::{
    entities::project::{
        NewProject, NewProjectImage, NewProjectLink, Project, ProjectImage, ProjectLink,
        UpdateProject,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

/// Projects and the images and links attached to them.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Projects owned by `user_id`, in insertion order
    async fn get_projects(&self, user_id: i32) -> Result<Vec<Project>, AppError>;
    async fn get_project(&self, id: i32) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    /// Applies only the supplied fields and refreshes `updated_at`
    async fn update_project(&self, id: i32, patch: &UpdateProject) -> Result<Option<Project>, AppError>;
    /// `Ok(false)` when no row matched
    async fn delete_project(&self, id: i32) -> Result<bool, AppError>;

    async fn get_project_images(&self, project_id: i32) -> Result<Vec<ProjectImage>, AppError>;
    async fn create_project_image(&self, image: &NewProjectImage) -> Result<ProjectImage, AppError>;
    async fn delete_project_image(&self, id: i32) -> Result<bool, AppError>;

    async fn get_project_links(&self, project_id: i32) -> Result<Vec<ProjectLink>, AppError>;
    async fn create_project_link(&self, link: &NewProjectLink) -> Result<ProjectLink, AppError>;
    async fn delete_project_link(&self, id: i32) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn get_projects(&self, user_id: i32) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE user_id = $1 ORDER BY id"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project(&self, id: i32) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        project.validate()?;

        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                user_id, title, short_description, full_description, tech_stack, icon_name
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#
        )
        .bind(project.user_id)
        .bind(&project.title)
        .bind(&project.short_description)
        .bind(&project.full_description)
        .bind(&project.tech_stack)
        .bind(&project.icon_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(&self, id: i32, patch: &UpdateProject) -> Result<Option<Project>, AppError> {
        patch.validate()?;

        // Only touched columns are written; updated_at always moves
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE projects SET updated_at = NOW()");

        if let Some(user_id) = patch.user_id {
            builder.push(", user_id = ").push_bind(user_id);
        }
        if let Some(title) = &patch.title {
            builder.push(", title = ").push_bind(title.clone());
        }
        if let Some(short_description) = &patch.short_description {
            builder.push(", short_description = ").push_bind(short_description.clone());
        }
        if let Some(full_description) = &patch.full_description {
            builder.push(", full_description = ").push_bind(full_description.clone());
        }
        if let Some(tech_stack) = &patch.tech_stack {
            builder.push(", tech_stack = ").push_bind(tech_stack.clone());
        }
        if let Some(icon_name) = patch.icon_name.as_column() {
            builder.push(", icon_name = ").push_bind(icon_name.map(str::to_owned));
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Project>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_project(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_project_images(&self, project_id: i32) -> Result<Vec<ProjectImage>, AppError> {
        let images = sqlx::query_as::<_, ProjectImage>(
            "SELECT * FROM project_images WHERE project_id = $1 ORDER BY id"
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    async fn create_project_image(&self, image: &NewProjectImage) -> Result<ProjectImage, AppError> {
        image.validate()?;

        let created = sqlx::query_as::<_, ProjectImage>(
            r#"
            INSERT INTO project_images (project_id, image_url, alt_text)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(image.project_id)
        .bind(&image.image_url)
        .bind(&image.alt_text)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_project_image(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM project_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_project_links(&self, project_id: i32) -> Result<Vec<ProjectLink>, AppError> {
        let links = sqlx::query_as::<_, ProjectLink>(
            "SELECT * FROM project_links WHERE project_id = $1 ORDER BY id"
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn create_project_link(&self, link: &NewProjectLink) -> Result<ProjectLink, AppError> {
        link.validate()?;

        let created = sqlx::query_as::<_, ProjectLink>(
            r#"
            INSERT INTO project_links (project_id, title, url)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(link.project_id)
        .bind(&link.title)
        .bind(&link.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_project_link(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM project_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use tracing::info;

use crate::{
    entities::project::{
        NewProject, NewProjectImage, NewProjectLink, Project, ProjectDetails, ProjectImage,
        ProjectLink, UpdateProject,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
};

fn project_not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}

/// Attaches images and links to an already loaded project.
pub(crate) async fn load_project_details<R>(repo: &R, project: Project) -> Result<ProjectDetails, AppError>
where
    R: ProjectRepository + ?Sized,
{
    let images = repo.get_project_images(project.id).await?;
    let links = repo.get_project_links(project.id).await?;

    Ok(ProjectDetails { project, images, links })
}

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists a user's projects in the order they were added
    pub async fn get_projects(&self, user_id: i32) -> Result<Vec<Project>, AppError> {
        self.project_repo.get_projects(user_id).await
    }

    pub async fn get_project(&self, id: i32) -> Result<Project, AppError> {
        self.project_repo
            .get_project(id)
            .await?
            .ok_or_else(project_not_found)
    }

    /// Retrieves a project together with its images and links
    pub async fn get_project_details(&self, id: i32) -> Result<ProjectDetails, AppError> {
        let project = self.get_project(id).await?;
        load_project_details(&self.project_repo, project).await
    }

    pub async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let created = self.project_repo.create_project(&project).await?;
        info!(project_id = created.id, user_id = created.user_id, "Project created");

        Ok(created)
    }

    /// Applies a partial update to an existing project
    pub async fn update_project(&self, id: i32, patch: UpdateProject) -> Result<Project, AppError> {
        self.project_repo
            .update_project(id, &patch)
            .await?
            .ok_or_else(project_not_found)
    }

    /// Deletes a project; its images and links must be removed first
    pub async fn delete_project(&self, id: i32) -> Result<(), AppError> {
        match self.project_repo.delete_project(id).await? {
            true => {
                info!(project_id = id, "Project deleted");
                Ok(())
            }
            false => Err(project_not_found()),
        }
    }

    pub async fn get_project_images(&self, project_id: i32) -> Result<Vec<ProjectImage>, AppError> {
        self.project_repo.get_project_images(project_id).await
    }

    pub async fn create_project_image(&self, image: NewProjectImage) -> Result<ProjectImage, AppError> {
        self.project_repo.create_project_image(&image).await
    }

    pub async fn delete_project_image(&self, id: i32) -> Result<(), AppError> {
        match self.project_repo.delete_project_image(id).await? {
            true => Ok(()),
            false => Err(AppError::NotFound("Project image not found".to_string())),
        }
    }

    pub async fn get_project_links(&self, project_id: i32) -> Result<Vec<ProjectLink>, AppError> {
        self.project_repo.get_project_links(project_id).await
    }

    pub async fn create_project_link(&self, link: NewProjectLink) -> Result<ProjectLink, AppError> {
        self.project_repo.create_project_link(&link).await
    }

    pub async fn delete_project_link(&self, id: i32) -> Result<(), AppError> {
        match self.project_repo.delete_project_link(id).await? {
            true => Ok(()),
            false => Err(AppError::NotFound("Project link not found".to_string())),
        }
    }
}

use crate::{
    entities::{portfolio::Portfolio, user::PublicUser},
    errors::AppError,
    repositories::{
        certification::CertificationRepository, project::ProjectRepository,
        skill::SkillRepository, user::UserRepository,
    },
    use_cases::{
        certification::load_certification_details, project::load_project_details,
        skill::load_skill_tree,
    },
};

/// Assembles the read-only view the public site renders for one owner.
pub struct PortfolioHandler<U, P, C, S>
where
    U: UserRepository,
    P: ProjectRepository,
    C: CertificationRepository,
    S: SkillRepository,
{
    pub user_repo: U,
    pub project_repo: P,
    pub certification_repo: C,
    pub skill_repo: S,
}

impl<U, P, C, S> PortfolioHandler<U, P, C, S>
where
    U: UserRepository,
    P: ProjectRepository,
    C: CertificationRepository,
    S: SkillRepository,
{
    pub fn new(user_repo: U, project_repo: P, certification_repo: C, skill_repo: S) -> Self {
        PortfolioHandler {
            user_repo,
            project_repo,
            certification_repo,
            skill_repo,
        }
    }

    pub async fn get_portfolio(&self, user_id: i32) -> Result<Portfolio, AppError> {
        let owner = self.user_repo
            .get_user(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut projects = Vec::new();
        for project in self.project_repo.get_projects(user_id).await? {
            projects.push(load_project_details(&self.project_repo, project).await?);
        }

        let mut certifications = Vec::new();
        for certification in self.certification_repo.get_certifications(user_id).await? {
            certifications.push(load_certification_details(&self.certification_repo, certification).await?);
        }

        let skill_categories = load_skill_tree(&self.skill_repo, user_id).await?;

        Ok(Portfolio {
            owner,
            projects,
            certifications,
            skill_categories,
        })
    }
}

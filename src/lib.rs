mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::db;

use repositories::sqlx_repo::{
    SqlxCertificationRepo, SqlxMessageRepo, SqlxProjectRepo, SqlxSkillRepo, SqlxUserRepo,
};
use shared_repos::SharedRepositories;
use use_cases::{
    certification::CertificationHandler, message::MessageHandler, portfolio::PortfolioHandler,
    project::ProjectHandler, skill::SkillHandler, user::UserHandler,
};

pub type AppUserHandler = UserHandler<SqlxUserRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppCertificationHandler = CertificationHandler<SqlxCertificationRepo>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;
pub type AppMessageHandler = MessageHandler<SqlxMessageRepo>;
pub type AppPortfolioHandler =
    PortfolioHandler<SqlxUserRepo, SqlxProjectRepo, SqlxCertificationRepo, SqlxSkillRepo>;

pub struct AppState {
    pub user_handler: AppUserHandler,
    pub project_handler: AppProjectHandler,
    pub certification_handler: AppCertificationHandler,
    pub skill_handler: AppSkillHandler,
    pub message_handler: AppMessageHandler,
    pub portfolio_handler: AppPortfolioHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self::from_repositories(SharedRepositories::new(pool))
    }

    pub fn from_repositories(repos: SharedRepositories) -> Self {
        let portfolio_handler = PortfolioHandler::new(
            repos.user_repo.clone(),
            repos.project_repo.clone(),
            repos.certification_repo.clone(),
            repos.skill_repo.clone(),
        );

        AppState {
            user_handler: UserHandler::new(repos.user_repo),
            project_handler: ProjectHandler::new(repos.project_repo),
            certification_handler: CertificationHandler::new(repos.certification_repo),
            skill_handler: SkillHandler::new(repos.skill_repo),
            message_handler: MessageHandler::new(repos.message_repo),
            portfolio_handler,
        }
    }
}

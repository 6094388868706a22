use crate::repositories::sqlx_repo::{
    SqlxCertificationRepo, SqlxMessageRepo, SqlxProjectRepo, SqlxSkillRepo, SqlxUserRepo,
};

/// Store handle: one repository per aggregate, all sharing the same pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: SqlxUserRepo,
    pub project_repo: SqlxProjectRepo,
    pub certification_repo: SqlxCertificationRepo,
    pub skill_repo: SqlxSkillRepo,
    pub message_repo: SqlxMessageRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let user_repo = SqlxUserRepo::new(pool.clone());
        let project_repo = SqlxProjectRepo::new(pool.clone());
        let certification_repo = SqlxCertificationRepo::new(pool.clone());
        let skill_repo = SqlxSkillRepo::new(pool.clone());
        let message_repo = SqlxMessageRepo::new(pool);

        SharedRepositories {
            user_repo,
            project_repo,
            certification_repo,
            skill_repo,
            message_repo,
        }
    }
}

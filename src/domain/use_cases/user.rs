use tracing::info;

use crate::{
    entities::user::{NewUser, PublicUser},
    errors::AppError,
    repositories::user::UserRepository,
};

pub struct UserHandler<R>
where
    R: UserRepository,
{
    pub user_repo: R,
}

impl<R> UserHandler<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        UserHandler { user_repo }
    }

    /// Registers a portfolio owner
    pub async fn create_user(&self, user: NewUser) -> Result<PublicUser, AppError> {
        let created = self.user_repo.create_user(&user).await?;
        info!(user_id = created.id, "User created");

        Ok(created.into())
    }

    /// Retrieves a user by id
    pub async fn get_user(&self, id: i32) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user(id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves a user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user_by_username(username)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.user_repo.check_connection().await
    }
}

pub mod certification;
pub mod message;
pub mod project;
pub mod skill;
pub mod sqlx_repo;
pub mod user;

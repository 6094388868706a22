pub mod certification;
pub mod extractors;
pub mod message;
pub mod portfolio;
pub mod project;
pub mod skill;
pub mod user;

pub mod certification;
pub mod message;
pub mod option_fields;
pub mod portfolio;
pub mod project;
pub mod skill;
pub mod user;
pub mod validation;

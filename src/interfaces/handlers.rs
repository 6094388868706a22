pub mod certifications;
pub mod home;
pub mod messages;
pub mod projects;
pub mod skills;
pub mod system;
pub mod users;

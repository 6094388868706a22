use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod certifications;
mod messages;
mod projects;
mod skills;
mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(users::config_routes)
            .configure(projects::config_routes)
            .configure(certifications::config_routes)
            .configure(skills::config_routes)
            .configure(messages::config_routes)
    );
}

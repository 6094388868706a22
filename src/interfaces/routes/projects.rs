use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{user_id}/projects")
            .route(web::get().to(projects::get_user_projects))
    )
    .service(
        web::resource("/projects")
            .route(web::post().to(projects::create_project))
    )
    .service(
        web::resource("/projects/{project_id}")
            .route(web::get().to(projects::get_project))
            .route(web::patch().to(projects::update_project))
            .route(web::delete().to(projects::delete_project))
    )
    .service(
        web::resource("/projects/{project_id}/images")
            .route(web::get().to(projects::get_project_images))
    )
    .service(
        web::resource("/projects/{project_id}/links")
            .route(web::get().to(projects::get_project_links))
    )
    .service(
        web::resource("/project-images")
            .route(web::post().to(projects::create_project_image))
    )
    .service(
        web::resource("/project-images/{image_id}")
            .route(web::delete().to(projects::delete_project_image))
    )
    .service(
        web::resource("/project-links")
            .route(web::post().to(projects::create_project_link))
    )
    .service(
        web::resource("/project-links/{link_id}")
            .route(web::delete().to(projects::delete_project_link))
    );
}

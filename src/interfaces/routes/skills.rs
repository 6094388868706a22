use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{user_id}/skill-categories")
            .route(web::get().to(skills::get_user_skill_categories))
    )
    .service(
        web::resource("/users/{user_id}/skills")
            .route(web::get().to(skills::get_user_skill_tree))
    )
    .service(
        web::resource("/skill-categories")
            .route(web::post().to(skills::create_skill_category))
    )
    .service(
        web::resource("/skill-categories/{category_id}")
            .route(web::get().to(skills::get_skill_category))
            .route(web::patch().to(skills::update_skill_category))
            .route(web::delete().to(skills::delete_skill_category))
    )
    .service(
        web::resource("/skill-categories/{category_id}/skills")
            .route(web::get().to(skills::get_category_skills))
    )
    .service(
        web::resource("/skills")
            .route(web::post().to(skills::create_skill))
    )
    .service(
        web::resource("/skills/{skill_id}")
            .route(web::delete().to(skills::delete_skill))
    );
}

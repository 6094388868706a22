use actix_web::web;

use crate::handlers::users;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::post().to(users::create_user))
    )
    .service(
        web::resource("/users/by-username/{username}")
            .route(web::get().to(users::get_user_by_username))
    )
    .service(
        web::resource("/users/{user_id}")
            .route(web::get().to(users::get_user))
    )
    .service(
        web::resource("/users/{user_id}/portfolio")
            .route(web::get().to(users::get_portfolio))
    );
}

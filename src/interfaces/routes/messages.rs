use actix_web::web;

use crate::handlers::messages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{user_id}/messages")
            .route(web::get().to(messages::get_user_messages))
    )
    .service(
        web::resource("/messages")
            .route(web::post().to(messages::create_message))
    )
    .service(
        web::resource("/messages/{message_id}")
            .route(web::get().to(messages::get_message))
            .route(web::delete().to(messages::delete_message))
    )
    .service(
        web::resource("/messages/{message_id}/read")
            .route(web::post().to(messages::mark_message_as_read))
    );
}

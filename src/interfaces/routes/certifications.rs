use actix_web::web;

use crate::handlers::certifications;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{user_id}/certifications")
            .route(web::get().to(certifications::get_user_certifications))
    )
    .service(
        web::resource("/certifications")
            .route(web::post().to(certifications::create_certification))
    )
    .service(
        web::resource("/certifications/{certification_id}")
            .route(web::get().to(certifications::get_certification))
            .route(web::patch().to(certifications::update_certification))
            .route(web::delete().to(certifications::delete_certification))
    )
    .service(
        web::resource("/certifications/{certification_id}/credentials")
            .route(web::get().to(certifications::get_certification_credentials))
    )
    .service(
        web::resource("/certification-credentials")
            .route(web::post().to(certifications::create_certification_credential))
    )
    .service(
        web::resource("/certification-credentials/{credential_id}")
            .route(web::delete().to(certifications::delete_certification_credential))
    );
}

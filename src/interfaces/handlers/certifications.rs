use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::certification::{NewCertification, NewCertificationCredential, UpdateCertification},
    errors::AppError,
    use_cases::extractors::JsonBody,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_user_certifications(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certifications = state
        .certification_handler
        .get_certifications(user_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(certifications))
}

#[instrument(skip(state, data))]
pub async fn create_certification(
    state: web::Data<AppState>,
    data: JsonBody<NewCertification>,
) -> Result<impl Responder, AppError> {
    let certification = state
        .certification_handler
        .create_certification(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(certification))
}

#[instrument(skip(state))]
pub async fn get_certification(
    certification_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let details = state
        .certification_handler
        .get_certification_details(certification_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(details))
}

#[instrument(skip(state, data))]
pub async fn update_certification(
    certification_id: web::Path<i32>,
    state: web::Data<AppState>,
    data: JsonBody<UpdateCertification>,
) -> Result<impl Responder, AppError> {
    let certification = state
        .certification_handler
        .update_certification(certification_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(certification))
}

#[instrument(skip(state))]
pub async fn delete_certification(
    certification_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .certification_handler
        .delete_certification(certification_id.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn get_certification_credentials(
    certification_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let credentials = state
        .certification_handler
        .get_certification_credentials(certification_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(credentials))
}

#[instrument(skip(state, data))]
pub async fn create_certification_credential(
    state: web::Data<AppState>,
    data: JsonBody<NewCertificationCredential>,
) -> Result<impl Responder, AppError> {
    let credential = state
        .certification_handler
        .create_certification_credential(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(credential))
}

#[instrument(skip(state))]
pub async fn delete_certification_credential(
    credential_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .certification_handler
        .delete_certification_credential(credential_id.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

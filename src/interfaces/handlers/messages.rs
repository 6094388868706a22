use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::message::NewMessage, errors::AppError, use_cases::extractors::JsonBody, AppState,
};

/// Inbox view: the user's messages plus the unread counter
#[instrument(skip(state))]
pub async fn get_user_messages(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let inbox = state.message_handler.get_inbox(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(inbox))
}

#[instrument(skip(state, data))]
pub async fn create_message(
    state: web::Data<AppState>,
    data: JsonBody<NewMessage>,
) -> Result<impl Responder, AppError> {
    let message = state.message_handler.create_message(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(message))
}

#[instrument(skip(state))]
pub async fn get_message(
    message_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.message_handler.get_message(message_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state))]
pub async fn mark_message_as_read(
    message_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.message_handler.mark_message_as_read(message_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state))]
pub async fn delete_message(
    message_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.message_handler.delete_message(message_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

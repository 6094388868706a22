use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::user::NewUser, errors::AppError, use_cases::extractors::JsonBody, AppState,
};

#[instrument(skip(state, data))]
pub async fn create_user(
    state: web::Data<AppState>,
    data: JsonBody<NewUser>,
) -> Result<impl Responder, AppError> {
    let user = state.user_handler.create_user(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[instrument(skip(state))]
pub async fn get_user(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user = state.user_handler.get_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[instrument(skip(state))]
pub async fn get_user_by_username(
    username: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user = state.user_handler.get_user_by_username(&username).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Everything the public site needs for one owner in a single response
#[instrument(skip(state))]
pub async fn get_portfolio(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let portfolio = state.portfolio_handler.get_portfolio(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(portfolio))
}

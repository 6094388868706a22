use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::skill::{NewSkill, NewSkillCategory, UpdateSkillCategory},
    errors::AppError,
    use_cases::extractors::JsonBody,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_user_skill_categories(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let categories = state.skill_handler.get_skill_categories(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// Categories with their skills nested, for the skills section
#[instrument(skip(state))]
pub async fn get_user_skill_tree(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let tree = state.skill_handler.get_skill_tree(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(tree))
}

#[instrument(skip(state, data))]
pub async fn create_skill_category(
    state: web::Data<AppState>,
    data: JsonBody<NewSkillCategory>,
) -> Result<impl Responder, AppError> {
    let category = state.skill_handler.create_skill_category(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(category))
}

#[instrument(skip(state))]
pub async fn get_skill_category(
    category_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let details = state
        .skill_handler
        .get_skill_category_details(category_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(details))
}

#[instrument(skip(state, data))]
pub async fn update_skill_category(
    category_id: web::Path<i32>,
    state: web::Data<AppState>,
    data: JsonBody<UpdateSkillCategory>,
) -> Result<impl Responder, AppError> {
    let category = state
        .skill_handler
        .update_skill_category(category_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(category))
}

#[instrument(skip(state))]
pub async fn delete_skill_category(
    category_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill_category(category_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn get_category_skills(
    category_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.get_skills(category_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: JsonBody<NewSkill>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.create_skill(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(skill))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    skill_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(skill_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

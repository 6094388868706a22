use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProject, NewProjectImage, NewProjectLink, UpdateProject},
    errors::AppError,
    use_cases::extractors::JsonBody,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_user_projects(
    user_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.get_projects(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: JsonBody<NewProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(project))
}

/// Returns the project with its images and links embedded
#[instrument(skip(state))]
pub async fn get_project(
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let details = state.project_handler.get_project_details(project_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(details))
}

#[instrument(skip(state, data))]
pub async fn update_project(
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
    data: JsonBody<UpdateProject>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(project_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(project_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn get_project_images(
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let images = state.project_handler.get_project_images(project_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(images))
}

#[instrument(skip(state, data))]
pub async fn create_project_image(
    state: web::Data<AppState>,
    data: JsonBody<NewProjectImage>,
) -> Result<impl Responder, AppError> {
    let image = state.project_handler.create_project_image(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(image))
}

#[instrument(skip(state))]
pub async fn delete_project_image(
    image_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project_image(image_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn get_project_links(
    project_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let links = state.project_handler.get_project_links(project_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(links))
}

#[instrument(skip(state, data))]
pub async fn create_project_link(
    state: web::Data<AppState>,
    data: JsonBody<NewProjectLink>,
) -> Result<impl Responder, AppError> {
    let link = state.project_handler.create_project_link(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(link))
}

#[instrument(skip(state))]
pub async fn delete_project_link(
    link_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project_link(link_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

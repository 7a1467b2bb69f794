use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::CourseModel,
    service::CourseService,
    types::{CourseCreateRequest, CourseResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a course with its holes
///
/// POST /courses (admin)
#[instrument(name = "create_course", skip(state, request))]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CourseCreateRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let service = CourseService::new(Arc::clone(&state.course_repository));
    let course = service.create_course(request).await?;

    info!(course_id = %course.id, "Course created");
    Ok(Json(course))
}

/// HTTP handler for listing courses
///
/// GET /courses
#[instrument(name = "list_courses", skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseModel>>, AppError> {
    let service = CourseService::new(Arc::clone(&state.course_repository));
    let courses = service.list_courses().await?;

    Ok(Json(courses))
}

/// HTTP handler for fetching a course together with its holes
///
/// GET /courses/:id
#[instrument(name = "get_course", skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let service = CourseService::new(Arc::clone(&state.course_repository));
    let course = service.get_course(&course_id).await?;

    Ok(Json(course))
}

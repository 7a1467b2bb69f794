use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{CourseModel, HoleModel},
    repository::CourseRepository,
    types::{CourseCreateRequest, CourseResponse},
};
use crate::shared::AppError;

/// Service for handling course business logic
pub struct CourseService {
    repository: Arc<dyn CourseRepository + Send + Sync>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates a course with its holes. Enforces the two course invariants:
    /// hole numbers are unique within the course, and handicap ranks form a
    /// permutation of 1..N.
    #[instrument(skip(self, request))]
    pub async fn create_course(
        &self,
        request: CourseCreateRequest,
    ) -> Result<CourseResponse, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Course name is required".to_string()));
        }
        if request.holes.is_empty() {
            return Err(AppError::Validation(
                "A course needs at least one hole".to_string(),
            ));
        }

        let hole_count = request.holes.len() as u8;

        let numbers: HashSet<u8> = request.holes.iter().map(|h| h.number).collect();
        if numbers.len() != request.holes.len()
            || numbers.iter().any(|&n| n < 1 || n > hole_count)
        {
            return Err(AppError::Validation(format!(
                "Hole numbers must be unique and cover 1..{}",
                hole_count
            )));
        }

        let ranks: HashSet<u8> = request.holes.iter().map(|h| h.handicap_rank).collect();
        if ranks.len() != request.holes.len() || ranks.iter().any(|&r| r < 1 || r > hole_count) {
            return Err(AppError::Validation(format!(
                "Handicap ranks must form a permutation of 1..{}",
                hole_count
            )));
        }

        let course = CourseModel::new(request.name, request.address);
        let holes: Vec<HoleModel> = request
            .holes
            .iter()
            .map(|h| HoleModel::new(course.id.clone(), h.number, h.par, h.handicap_rank))
            .collect();

        self.repository.create_course(&course, &holes).await?;

        info!(course_id = %course.id, hole_count = holes.len(), "Course created successfully");
        Ok(CourseResponse::from_parts(course, holes))
    }

    #[instrument(skip(self))]
    pub async fn get_course(&self, course_id: &str) -> Result<CourseResponse, AppError> {
        let course = self
            .repository
            .get_course(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
        let holes = self.repository.holes_for_course(course_id).await?;

        Ok(CourseResponse::from_parts(course, holes))
    }

    #[instrument(skip(self))]
    pub async fn list_courses(&self) -> Result<Vec<CourseModel>, AppError> {
        self.repository.list_courses().await
    }
}

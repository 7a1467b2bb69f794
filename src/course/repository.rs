use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{CourseModel, HoleModel};
use crate::shared::AppError;

/// Trait for course repository operations. A course and its holes are
/// created together; holes are immutable afterwards.
#[async_trait]
pub trait CourseRepository {
    async fn create_course(
        &self,
        course: &CourseModel,
        holes: &[HoleModel],
    ) -> Result<(), AppError>;
    async fn get_course(&self, course_id: &str) -> Result<Option<CourseModel>, AppError>;
    async fn list_courses(&self) -> Result<Vec<CourseModel>, AppError>;
    async fn holes_for_course(&self, course_id: &str) -> Result<Vec<HoleModel>, AppError>;
}

/// In-memory implementation of CourseRepository for development and testing
pub struct InMemoryCourseRepository {
    courses: Mutex<HashMap<String, (CourseModel, Vec<HoleModel>)>>,
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            courses: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    #[instrument(skip(self, course, holes))]
    async fn create_course(
        &self,
        course: &CourseModel,
        holes: &[HoleModel],
    ) -> Result<(), AppError> {
        debug!(course_id = %course.id, name = %course.name, hole_count = holes.len(), "Creating course in memory");

        let mut courses = self.courses.lock().unwrap();
        if courses.contains_key(&course.id) {
            warn!(course_id = %course.id, "Course already exists in memory");
            return Err(AppError::Conflict("Course already exists".to_string()));
        }
        courses.insert(course.id.clone(), (course.clone(), holes.to_vec()));

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_course(&self, course_id: &str) -> Result<Option<CourseModel>, AppError> {
        let courses = self.courses.lock().unwrap();
        Ok(courses.get(course_id).map(|(course, _)| course.clone()))
    }

    #[instrument(skip(self))]
    async fn list_courses(&self) -> Result<Vec<CourseModel>, AppError> {
        let courses = self.courses.lock().unwrap();
        let mut list: Vec<CourseModel> = courses.values().map(|(c, _)| c.clone()).collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn holes_for_course(&self, course_id: &str) -> Result<Vec<HoleModel>, AppError> {
        let courses = self.courses.lock().unwrap();
        match courses.get(course_id) {
            Some((_, holes)) => {
                let mut holes = holes.clone();
                holes.sort_by_key(|h| h.number);
                Ok(holes)
            }
            None => Err(AppError::NotFound("Course not found".to_string())),
        }
    }
}

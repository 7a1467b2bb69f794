use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex as AsyncMutex, RwLock};

use crate::course::repository::CourseRepository;
use crate::event::repository::EventRepository;
use crate::group::repository::GroupRepository;
use crate::player::repository::PlayerRepository;
use crate::scoring::repository::ScoreRepository;
use crate::scoring::service::ScoreService;
use crate::session::repository::SessionRepository;
use crate::session::service::SessionService;

/// Registry of per-event async mutexes. Score submissions and lock toggles
/// for the same event acquire the same mutex, so a toggle can never commit
/// between a submission's lock check and its write: a score either lands
/// wholly before the lock takes effect or is rejected after it.
pub struct EventLockRegistry {
    locks: RwLock<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl EventLockRegistry {
    pub fn new() -> Self {
        Self {
            locks: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the mutex guarding writes for the event, creating it on
    /// first use.
    pub async fn lock_for(&self, event_id: &str) -> Arc<AsyncMutex<()>> {
        {
            let locks = self.locks.read().await;
            if let Some(lock) = locks.get(event_id) {
                return lock.clone();
            }
        }

        let mut locks = self.locks.write().await;
        locks
            .entry(event_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

impl Default for EventLockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub score_service: Arc<ScoreService>,
    pub event_locks: Arc<EventLockRegistry>,
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    pub course_repository: Arc<dyn CourseRepository + Send + Sync>,
    pub event_repository: Arc<dyn EventRepository + Send + Sync>,
    pub group_repository: Arc<dyn GroupRepository + Send + Sync>,
    pub score_repository: Arc<dyn ScoreRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        session_repository: Arc<dyn SessionRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        course_repository: Arc<dyn CourseRepository + Send + Sync>,
        event_repository: Arc<dyn EventRepository + Send + Sync>,
        group_repository: Arc<dyn GroupRepository + Send + Sync>,
        score_repository: Arc<dyn ScoreRepository + Send + Sync>,
    ) -> Self {
        let session_service = Arc::new(SessionService::new(session_repository));
        let event_locks = Arc::new(EventLockRegistry::new());
        let score_service = Arc::new(ScoreService::new(
            Arc::clone(&score_repository),
            Arc::clone(&group_repository),
            Arc::clone(&event_repository),
            Arc::clone(&course_repository),
            Arc::clone(&player_repository),
            Arc::clone(&event_locks),
        ));

        Self {
            session_service,
            score_service,
            event_locks,
            player_repository,
            course_repository,
            event_repository,
            group_repository,
            score_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Scorecard locked: {0}")]
    Locked(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Locked(msg) => (StatusCode::LOCKED, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::JwtError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

use axum::{extract::State, Extension, Json};
use tracing::{info, instrument};

use super::types::{SessionClaims, SessionCreateRequest, SessionResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a new session
///
/// POST /session
/// Returns a JWT token as session_id plus the resolved username
#[instrument(name = "create_session", skip(state, request))]
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<SessionCreateRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.session_service.create_session(request).await?;

    info!(
        username = %session.username,
        is_admin = session.is_admin,
        "Session created successfully"
    );

    Ok(Json(session))
}

/// HTTP handler for validating the current session
///
/// GET /session/validate (behind jwt_auth)
/// Echoes back the claims the middleware resolved
#[instrument(name = "validate_session", skip(claims))]
pub async fn validate_session(
    Extension(claims): Extension<SessionClaims>,
) -> Json<SessionClaims> {
    Json(claims)
}

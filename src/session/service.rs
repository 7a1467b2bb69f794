use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    generators::{PetNameUsernameGenerator, UsernameGenerator},
    models::SessionModel,
    repository::SessionRepository,
    token::TokenConfig,
    types::{SessionClaims, SessionCreateRequest, SessionResponse},
};
use crate::shared::AppError;

/// Service for handling session business logic
pub struct SessionService {
    token_config: TokenConfig,
    username_generator: Arc<dyn UsernameGenerator>,
    repository: Arc<dyn SessionRepository + Send + Sync>,
    admin_key: Option<String>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository + Send + Sync>) -> Self {
        Self {
            token_config: TokenConfig::new(),
            username_generator: Arc::new(PetNameUsernameGenerator::new()),
            repository,
            // Admin capability is granted by presenting this shared secret
            // at session creation; unset means no admin sessions.
            admin_key: std::env::var("ADMIN_KEY").ok(),
        }
    }

    /// Sets a fixed admin key, overriding the environment (used by tests)
    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = Some(key.into());
        self
    }

    /// Creates a new session. Missing names get a generated pet name;
    /// a request carrying the correct admin key produces an admin session.
    #[instrument(skip(self, request))]
    pub async fn create_session(
        &self,
        request: SessionCreateRequest,
    ) -> Result<SessionResponse, AppError> {
        let username = match request.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.username_generator.generate().await,
        };

        let is_admin = match (&self.admin_key, &request.admin_key) {
            (Some(expected), Some(provided)) if expected == provided => true,
            (Some(_), Some(_)) => {
                warn!(username = %username, "Session creation presented a wrong admin key");
                return Err(AppError::Unauthorized("Invalid admin key".to_string()));
            }
            _ => false,
        };

        // Sweep expired sessions on each creation so the store doesn't
        // accumulate stale rows between deployments
        let removed = self.repository.cleanup_expired_sessions().await?;
        if removed > 0 {
            info!(removed, "Expired sessions cleaned up");
        }

        let session = SessionModel::new(username.clone(), is_admin, self.token_config.expiration_days);
        self.repository.create_session(&session).await?;

        let token =
            self.token_config
                .create_token(session.id.clone(), username.clone(), is_admin)?;

        info!(
            session_id = %session.id,
            username = %username,
            is_admin,
            "Session created successfully"
        );

        Ok(SessionResponse {
            session_id: token,
            username,
            is_admin,
        })
    }

    /// Validates a session token and returns the claims if valid
    #[instrument(skip(self, token))]
    pub async fn validate_session(&self, token: &str) -> Result<SessionClaims, AppError> {
        // First validate JWT token structure and signature
        let claims = self.token_config.validate_token(token)?;

        // Then validate session exists in the store and hasn't been revoked
        match self.repository.get_session(&claims.session_id).await? {
            Some(session_model) => {
                if session_model.is_expired() {
                    warn!(
                        session_id = %claims.session_id,
                        "Session found in store but has expired"
                    );
                    return Err(AppError::Unauthorized("Session has expired".to_string()));
                }

                Ok(claims)
            }
            None => {
                warn!(
                    session_id = %claims.session_id,
                    "Session not found in store - may have been revoked"
                );
                Err(AppError::Unauthorized(
                    "Session not found or has been revoked".to_string(),
                ))
            }
        }
    }

    /// Revokes a session by removing it from the store
    #[instrument(skip(self))]
    pub async fn revoke_session(&self, session_id: &str) -> Result<(), AppError> {
        info!(session_id = %session_id, "Revoking session");
        self.repository.delete_session(session_id).await
    }
}

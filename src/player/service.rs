use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::PlayerModel,
    repository::PlayerRepository,
    types::{PlayerCreateRequest, PlayerResponse, PlayerUpdateRequest},
};
use crate::shared::AppError;

/// Service for handling player business logic
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request))]
    pub async fn create_player(
        &self,
        request: PlayerCreateRequest,
    ) -> Result<PlayerResponse, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Player name is required".to_string()));
        }

        let player = PlayerModel::new(request.name, request.handicap, request.email);
        self.repository.create_player(&player).await?;

        info!(player_id = %player.id, name = %player.name, "Player created successfully");
        Ok(player.into())
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<PlayerResponse, AppError> {
        let player = self
            .repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;
        Ok(player.into())
    }

    #[instrument(skip(self))]
    pub async fn list_players(&self) -> Result<Vec<PlayerResponse>, AppError> {
        let players = self.repository.list_players().await?;
        Ok(players.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn update_player(
        &self,
        player_id: &str,
        request: PlayerUpdateRequest,
    ) -> Result<PlayerResponse, AppError> {
        let mut player = self
            .repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("Player name is required".to_string()));
            }
            player.name = name;
        }
        if request.clear_handicap {
            player.handicap = None;
        } else if let Some(handicap) = request.handicap {
            player.handicap = Some(handicap);
        }
        if let Some(email) = request.email {
            player.email = Some(email);
        }

        self.repository.update_player(&player).await?;

        info!(player_id = %player.id, "Player updated successfully");
        Ok(player.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::repository::InMemoryPlayerRepository;

    fn service() -> PlayerService {
        PlayerService::new(Arc::new(InMemoryPlayerRepository::new()))
    }

    #[tokio::test]
    async fn test_create_player_requires_name() {
        let service = service();
        let result = service
            .create_player(PlayerCreateRequest {
                name: "  ".to_string(),
                handicap: None,
                email: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_clears_handicap() {
        let service = service();
        let created = service
            .create_player(PlayerCreateRequest {
                name: "alice".to_string(),
                handicap: Some(12.0),
                email: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_player(
                &created.id,
                PlayerUpdateRequest {
                    clear_handicap: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.handicap.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_player() {
        let service = service();
        let result = service
            .update_player("missing", PlayerUpdateRequest::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

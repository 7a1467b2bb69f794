use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::ScoreModel;
use crate::shared::AppError;

/// Trait for score repository operations. The store enforces one row per
/// (event_id, player_id, hole_id): `upsert_score` creates or updates in
/// place, so a concurrent create racing into the same key lands as an
/// update of the same logical row rather than a user-visible conflict.
#[async_trait]
pub trait ScoreRepository {
    async fn upsert_score(&self, score: &ScoreModel) -> Result<ScoreModel, AppError>;
    async fn get_score(
        &self,
        event_id: &str,
        player_id: &str,
        hole_id: &str,
    ) -> Result<Option<ScoreModel>, AppError>;

    /// Removes the row for the triple, representing a blanked score box.
    /// Returns whether a row existed.
    async fn clear_score(
        &self,
        event_id: &str,
        player_id: &str,
        hole_id: &str,
    ) -> Result<bool, AppError>;

    async fn scores_for_event(&self, event_id: &str) -> Result<Vec<ScoreModel>, AppError>;
    async fn scores_for_hole(
        &self,
        event_id: &str,
        hole_id: &str,
    ) -> Result<Vec<ScoreModel>, AppError>;

    /// Rewrites the skin flag on every row of the hole: true for the winner
    /// (if any), false for everyone else. Hole-wide by design so a stale
    /// flag on a previously-winning row can never survive a re-evaluation.
    async fn set_skin_winner(
        &self,
        event_id: &str,
        hole_id: &str,
        winner_player_id: Option<&str>,
    ) -> Result<(), AppError>;
}

/// In-memory implementation of ScoreRepository for development and testing.
/// The compound map key mirrors the store's uniqueness constraint.
pub struct InMemoryScoreRepository {
    scores: Mutex<HashMap<(String, String, String), ScoreModel>>,
}

impl Default for InMemoryScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScoreRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            scores: Mutex::new(HashMap::new()),
        }
    }
}

fn key(event_id: &str, player_id: &str, hole_id: &str) -> (String, String, String) {
    (
        event_id.to_string(),
        player_id.to_string(),
        hole_id.to_string(),
    )
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    #[instrument(skip(self, score))]
    async fn upsert_score(&self, score: &ScoreModel) -> Result<ScoreModel, AppError> {
        let mut scores = self.scores.lock().unwrap();
        let k = key(&score.event_id, &score.player_id, &score.hole_id);

        let stored = match scores.get(&k) {
            Some(existing) => {
                debug!(score_id = %existing.id, "Updating existing score row in memory");
                let mut updated = existing.clone();
                updated.gross = score.gross;
                updated.net = score.net;
                updated.updated_at = Utc::now();
                updated
            }
            None => {
                debug!(score_id = %score.id, "Inserting new score row in memory");
                score.clone()
            }
        };

        scores.insert(k, stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn get_score(
        &self,
        event_id: &str,
        player_id: &str,
        hole_id: &str,
    ) -> Result<Option<ScoreModel>, AppError> {
        let scores = self.scores.lock().unwrap();
        Ok(scores.get(&key(event_id, player_id, hole_id)).cloned())
    }

    #[instrument(skip(self))]
    async fn clear_score(
        &self,
        event_id: &str,
        player_id: &str,
        hole_id: &str,
    ) -> Result<bool, AppError> {
        let mut scores = self.scores.lock().unwrap();
        let removed = scores.remove(&key(event_id, player_id, hole_id)).is_some();

        debug!(event_id = %event_id, player_id = %player_id, removed, "Cleared score row in memory");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn scores_for_event(&self, event_id: &str) -> Result<Vec<ScoreModel>, AppError> {
        let scores = self.scores.lock().unwrap();
        Ok(scores
            .values()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn scores_for_hole(
        &self,
        event_id: &str,
        hole_id: &str,
    ) -> Result<Vec<ScoreModel>, AppError> {
        let scores = self.scores.lock().unwrap();
        Ok(scores
            .values()
            .filter(|s| s.event_id == event_id && s.hole_id == hole_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn set_skin_winner(
        &self,
        event_id: &str,
        hole_id: &str,
        winner_player_id: Option<&str>,
    ) -> Result<(), AppError> {
        let mut scores = self.scores.lock().unwrap();
        for score in scores.values_mut() {
            if score.event_id == event_id && score.hole_id == hole_id {
                score.skin_won = Some(score.player_id.as_str()) == winner_player_id;
            }
        }

        Ok(())
    }
}

/// PostgreSQL implementation of score repository. The upsert leans on the
/// compound uniqueness constraint with ON CONFLICT DO UPDATE.
pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_model(row: &sqlx::postgres::PgRow) -> ScoreModel {
        ScoreModel {
            id: row.get("id"),
            event_id: row.get("event_id"),
            player_id: row.get("player_id"),
            hole_id: row.get("hole_id"),
            gross: row.get::<i16, _>("gross") as u8,
            net: row.get::<Option<i16>, _>("net").map(|n| n as u8),
            skin_won: row.get("skin_won"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    #[instrument(skip(self, score))]
    async fn upsert_score(&self, score: &ScoreModel) -> Result<ScoreModel, AppError> {
        let row = sqlx::query(
            "INSERT INTO scores (id, event_id, player_id, hole_id, gross, net, skin_won, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7) \
             ON CONFLICT (event_id, player_id, hole_id) DO UPDATE \
             SET gross = EXCLUDED.gross, net = EXCLUDED.net, updated_at = EXCLUDED.updated_at \
             RETURNING id, event_id, player_id, hole_id, gross, net, skin_won, updated_at",
        )
        .bind(&score.id)
        .bind(&score.event_id)
        .bind(&score.player_id)
        .bind(&score.hole_id)
        .bind(score.gross as i16)
        .bind(score.net.map(|n| n as i16))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to upsert score in database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_model(&row))
    }

    #[instrument(skip(self))]
    async fn get_score(
        &self,
        event_id: &str,
        player_id: &str,
        hole_id: &str,
    ) -> Result<Option<ScoreModel>, AppError> {
        let row = sqlx::query(
            "SELECT id, event_id, player_id, hole_id, gross, net, skin_won, updated_at \
             FROM scores WHERE event_id = $1 AND player_id = $2 AND hole_id = $3",
        )
        .bind(event_id)
        .bind(player_id)
        .bind(hole_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch score from database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.as_ref().map(Self::row_to_model))
    }

    #[instrument(skip(self))]
    async fn clear_score(
        &self,
        event_id: &str,
        player_id: &str,
        hole_id: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "DELETE FROM scores WHERE event_id = $1 AND player_id = $2 AND hole_id = $3",
        )
        .bind(event_id)
        .bind(player_id)
        .bind(hole_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to clear score in database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn scores_for_event(&self, event_id: &str) -> Result<Vec<ScoreModel>, AppError> {
        let rows = sqlx::query(
            "SELECT id, event_id, player_id, hole_id, gross, net, skin_won, updated_at \
             FROM scores WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list scores for event from database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(rows.iter().map(Self::row_to_model).collect())
    }

    #[instrument(skip(self))]
    async fn scores_for_hole(
        &self,
        event_id: &str,
        hole_id: &str,
    ) -> Result<Vec<ScoreModel>, AppError> {
        let rows = sqlx::query(
            "SELECT id, event_id, player_id, hole_id, gross, net, skin_won, updated_at \
             FROM scores WHERE event_id = $1 AND hole_id = $2",
        )
        .bind(event_id)
        .bind(hole_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list scores for hole from database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(rows.iter().map(Self::row_to_model).collect())
    }

    #[instrument(skip(self))]
    async fn set_skin_winner(
        &self,
        event_id: &str,
        hole_id: &str,
        winner_player_id: Option<&str>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE scores SET skin_won = (player_id = $3) \
             WHERE event_id = $1 AND hole_id = $2",
        )
        .bind(event_id)
        .bind(hole_id)
        .bind(winner_player_id.unwrap_or(""))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to rewrite skin flags in database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(player_id: &str, hole_id: &str, gross: u8) -> ScoreModel {
        ScoreModel::new(
            "event-1".to_string(),
            player_id.to_string(),
            hole_id.to_string(),
            gross,
            Some(gross),
        )
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates_in_place() {
        let repo = InMemoryScoreRepository::new();

        let created = repo.upsert_score(&score("alice", "hole-1", 5)).await.unwrap();
        assert_eq!(created.gross, 5);

        // Second write for the same triple must update the same logical row
        let updated = repo.upsert_score(&score("alice", "hole-1", 4)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.gross, 4);

        let all = repo.scores_for_event("event-1").await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_score() {
        let repo = InMemoryScoreRepository::new();
        repo.upsert_score(&score("alice", "hole-1", 5)).await.unwrap();

        assert!(repo.clear_score("event-1", "alice", "hole-1").await.unwrap());
        assert!(repo
            .get_score("event-1", "alice", "hole-1")
            .await
            .unwrap()
            .is_none());

        // Clearing an already-blank box is a no-op
        assert!(!repo.clear_score("event-1", "alice", "hole-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_scores_for_hole_filters() {
        let repo = InMemoryScoreRepository::new();
        repo.upsert_score(&score("alice", "hole-1", 5)).await.unwrap();
        repo.upsert_score(&score("bob", "hole-1", 4)).await.unwrap();
        repo.upsert_score(&score("alice", "hole-2", 3)).await.unwrap();

        let hole_one = repo.scores_for_hole("event-1", "hole-1").await.unwrap();
        assert_eq!(hole_one.len(), 2);
    }

    #[tokio::test]
    async fn test_set_skin_winner_rewrites_every_row() {
        let repo = InMemoryScoreRepository::new();
        repo.upsert_score(&score("alice", "hole-1", 5)).await.unwrap();
        repo.upsert_score(&score("bob", "hole-1", 4)).await.unwrap();

        repo.set_skin_winner("event-1", "hole-1", Some("alice"))
            .await
            .unwrap();
        // Winner moves: the old flag must be cleared, not left stale
        repo.set_skin_winner("event-1", "hole-1", Some("bob"))
            .await
            .unwrap();

        let rows = repo.scores_for_hole("event-1", "hole-1").await.unwrap();
        for row in rows {
            assert_eq!(row.skin_won, row.player_id == "bob");
        }
    }

    #[tokio::test]
    async fn test_set_skin_winner_none_clears_all() {
        let repo = InMemoryScoreRepository::new();
        repo.upsert_score(&score("alice", "hole-1", 4)).await.unwrap();
        repo.set_skin_winner("event-1", "hole-1", Some("alice"))
            .await
            .unwrap();

        repo.set_skin_winner("event-1", "hole-1", None).await.unwrap();

        let rows = repo.scores_for_hole("event-1", "hole-1").await.unwrap();
        assert!(rows.iter().all(|r| !r.skin_won));
    }
}

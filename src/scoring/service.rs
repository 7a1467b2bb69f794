use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::{
    handicap::net_score,
    leaderboard::{rank, LeaderboardEntry},
    models::ScoreModel,
    repository::ScoreRepository,
    scorecard::aggregate,
    skins::evaluate_skins,
    types::{
        HoleHeader, HoleScoreCell, LeaderboardResponse, RankedEntry, ScorecardResponse,
        ScorecardRow, SkinResult, SkinsResponse, SubmitScoreRequest, SubmitScoreResponse,
    },
    GROSS_MAX, GROSS_MIN,
};
use crate::course::models::HoleModel;
use crate::course::repository::CourseRepository;
use crate::event::models::EventModel;
use crate::event::repository::EventRepository;
use crate::group::repository::GroupRepository;
use crate::player::models::PlayerModel;
use crate::player::repository::PlayerRepository;
use crate::shared::{AppError, EventLockRegistry};

/// Orchestrates score writes and the derived state that hangs off them.
///
/// Every mutation runs under the event's mutex from the shared
/// `EventLockRegistry`, which lock toggles acquire too. The lock-gate
/// check, the row upsert and the hole-wide skins rewrite therefore behave
/// as one logical transaction with respect to concurrent submissions and
/// lock toggles: a write can never persist after the group's lock has been
/// durably observed set, and racing writes to the same hole each leave
/// the skins flags fully re-derived.
pub struct ScoreService {
    score_repository: Arc<dyn ScoreRepository + Send + Sync>,
    group_repository: Arc<dyn GroupRepository + Send + Sync>,
    event_repository: Arc<dyn EventRepository + Send + Sync>,
    course_repository: Arc<dyn CourseRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    event_locks: Arc<EventLockRegistry>,
}

impl ScoreService {
    pub fn new(
        score_repository: Arc<dyn ScoreRepository + Send + Sync>,
        group_repository: Arc<dyn GroupRepository + Send + Sync>,
        event_repository: Arc<dyn EventRepository + Send + Sync>,
        course_repository: Arc<dyn CourseRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        event_locks: Arc<EventLockRegistry>,
    ) -> Self {
        Self {
            score_repository,
            group_repository,
            event_repository,
            course_repository,
            player_repository,
            event_locks,
        }
    }

    /// Submits or blanks one hole score. Validation and the lock gate run
    /// before anything is written; on success the net score is re-derived
    /// for the row and the skins flags are rewritten for the whole hole.
    #[instrument(skip(self, request))]
    pub async fn submit_score(
        &self,
        request: SubmitScoreRequest,
    ) -> Result<SubmitScoreResponse, AppError> {
        // Range check comes first: an invalid value must leave the prior
        // stored state completely untouched.
        if let Some(gross) = request.gross {
            if !(GROSS_MIN..=GROSS_MAX).contains(&gross) {
                warn!(gross, "Rejected out-of-range gross score");
                return Err(AppError::Validation(format!(
                    "Gross score must be between {} and {}",
                    GROSS_MIN, GROSS_MAX
                )));
            }
        }

        let event = self
            .event_repository
            .get_event(&request.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let player = self
            .player_repository
            .get_player(&request.player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let holes = self
            .course_repository
            .holes_for_course(&event.course_id)
            .await?;
        let holes_in_round = holes.len() as u8;
        let hole = holes
            .iter()
            .find(|h| h.number == request.hole_number)
            .ok_or_else(|| AppError::NotFound("Hole not found".to_string()))?
            .clone();

        // Everything from the lock check to the skins rewrite happens under
        // the event's mutex, shared with the lock-toggle path.
        let event_lock = self.event_locks.lock_for(&request.event_id).await;
        let _guard = event_lock.lock().await;

        // Re-read the group inside the critical section so a toggle that
        // landed just before us is honored.
        let group = self
            .group_repository
            .get_group(&request.group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;
        if group.event_id != request.event_id {
            return Err(AppError::Validation(
                "Group does not belong to this event".to_string(),
            ));
        }
        if group.locked {
            info!(group_id = %group.id, "Score submission refused: scorecard is locked");
            return Err(AppError::Locked(
                "Scorecard is locked for this group".to_string(),
            ));
        }
        if !group.has_player(&request.player_id) {
            return Err(AppError::Validation(
                "Player is not a member of this group".to_string(),
            ));
        }

        let stored = match request.gross {
            None => {
                let removed = self
                    .score_repository
                    .clear_score(&request.event_id, &request.player_id, &hole.id)
                    .await?;
                debug!(removed, hole_number = hole.number, "Score box blanked");
                None
            }
            Some(gross) => {
                let net = net_score(gross, player.handicap, hole.handicap_rank, holes_in_round);
                let score = ScoreModel::new(
                    request.event_id.clone(),
                    request.player_id.clone(),
                    hole.id.clone(),
                    gross,
                    Some(net),
                );
                Some(self.score_repository.upsert_score(&score).await?)
            }
        };

        // Any change on the hole can move the skin, so re-derive it from
        // every sibling row and rewrite all the flags.
        let skin_winner = self.reevaluate_skins(&request.event_id, &hole.id).await?;

        info!(
            event_id = %request.event_id,
            player_id = %request.player_id,
            hole_number = hole.number,
            cleared = stored.is_none(),
            "Score submission processed"
        );

        Ok(SubmitScoreResponse {
            cleared: stored.is_none(),
            score: stored.map(|mut s| {
                s.skin_won = Some(s.player_id.as_str()) == skin_winner.as_deref();
                s.into()
            }),
            skin_winner,
        })
    }

    /// Builds the full scorecard for an event: hole headers plus one row
    /// per participant in registration order.
    #[instrument(skip(self))]
    pub async fn scorecard(&self, event_id: &str) -> Result<ScorecardResponse, AppError> {
        let (event, holes, players) = self.event_context(event_id).await?;
        let scores = self.score_repository.scores_for_event(event_id).await?;

        let totals = aggregate(&holes, &scores, &players);

        let hole_numbers: HashMap<&str, u8> =
            holes.iter().map(|h| (h.id.as_str(), h.number)).collect();

        let rows = players
            .iter()
            .map(|player| {
                let mut cells: Vec<HoleScoreCell> = scores
                    .iter()
                    .filter(|s| s.player_id == player.id)
                    .filter_map(|s| {
                        hole_numbers.get(s.hole_id.as_str()).map(|&number| HoleScoreCell {
                            hole_number: number,
                            gross: s.gross,
                            net: s.net,
                            skin_won: s.skin_won,
                        })
                    })
                    .collect();
                cells.sort_by_key(|c| c.hole_number);

                ScorecardRow {
                    player_id: player.id.clone(),
                    player_name: player.name.clone(),
                    handicap: player.handicap,
                    holes: cells,
                    front: totals.front_for(&player.id),
                    back: totals.back_for(&player.id),
                    total: totals.total_for(&player.id),
                }
            })
            .collect();

        Ok(ScorecardResponse {
            event_id: event.id,
            holes: holes
                .iter()
                .map(|h| HoleHeader {
                    number: h.number,
                    par: h.par,
                    handicap_rank: h.handicap_rank,
                })
                .collect(),
            rows,
        })
    }

    /// Ranks every participant by aggregated net total. Players with no
    /// entered holes appear at their zero total; `holes_played` lets the
    /// caller apply its own policy for them.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self, event_id: &str) -> Result<LeaderboardResponse, AppError> {
        let (event, holes, players) = self.event_context(event_id).await?;
        let scores = self.score_repository.scores_for_event(event_id).await?;

        let totals = aggregate(&holes, &scores, &players);

        // Registration order in, so ties break by registration order out
        let participants: Vec<LeaderboardEntry> = players
            .iter()
            .map(|player| LeaderboardEntry {
                player_id: player.id.clone(),
                player_name: player.name.clone(),
                total_net: totals.total_for(&player.id),
                holes_played: scores.iter().filter(|s| s.player_id == player.id).count() as u32,
            })
            .collect();

        let entries = rank(&participants)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                position: (i + 1) as u32,
                entry,
            })
            .collect();

        Ok(LeaderboardResponse {
            event_id: event.id,
            entries,
        })
    }

    /// Reports the current skin holder for every hole of the event.
    #[instrument(skip(self))]
    pub async fn skins(&self, event_id: &str) -> Result<SkinsResponse, AppError> {
        let (event, holes, _) = self.event_context(event_id).await?;
        let scores = self.score_repository.scores_for_event(event_id).await?;

        let results = holes
            .iter()
            .map(|hole| {
                let hole_scores: Vec<ScoreModel> = scores
                    .iter()
                    .filter(|s| s.hole_id == hole.id)
                    .cloned()
                    .collect();
                let winner = evaluate_skins(&hole_scores);
                let winning_net = winner.as_ref().and_then(|id| {
                    hole_scores
                        .iter()
                        .find(|s| &s.player_id == id)
                        .map(|s| s.effective_net())
                });
                SkinResult {
                    hole_number: hole.number,
                    winner_player_id: winner,
                    winning_net,
                }
            })
            .collect();

        Ok(SkinsResponse {
            event_id: event.id,
            holes: results,
        })
    }

    async fn reevaluate_skins(
        &self,
        event_id: &str,
        hole_id: &str,
    ) -> Result<Option<String>, AppError> {
        let hole_scores = self
            .score_repository
            .scores_for_hole(event_id, hole_id)
            .await?;
        let winner = evaluate_skins(&hole_scores);
        self.score_repository
            .set_skin_winner(event_id, hole_id, winner.as_deref())
            .await?;
        Ok(winner)
    }

    /// Loads the event, its course holes (sorted by number) and its
    /// participants in registration order.
    async fn event_context(
        &self,
        event_id: &str,
    ) -> Result<(EventModel, Vec<HoleModel>, Vec<PlayerModel>), AppError> {
        let event = self
            .event_repository
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let holes = self
            .course_repository
            .holes_for_course(&event.course_id)
            .await?;

        let mut players = Vec::with_capacity(event.player_ids.len());
        for player_id in &event.player_ids {
            let player = self
                .player_repository
                .get_player(player_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;
            players.push(player);
        }

        Ok((event, holes, players))
    }

}

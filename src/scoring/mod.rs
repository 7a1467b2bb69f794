pub mod handicap;
pub mod handlers;
pub mod leaderboard;
pub mod models;
pub mod repository;
pub mod scorecard;
pub mod service;
pub mod skins;
pub mod types;

pub use handicap::{net_score, stroke_allowance};
pub use leaderboard::{rank, LeaderboardEntry};
pub use models::ScoreModel;
pub use repository::{InMemoryScoreRepository, ScoreRepository};
pub use scorecard::{aggregate, ScorecardTotals};
pub use service::ScoreService;
pub use skins::evaluate_skins;

/// Gross scores accepted from the UI
pub const GROSS_MIN: u8 = 1;
pub const GROSS_MAX: u8 = 12;

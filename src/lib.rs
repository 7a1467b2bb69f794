// Library crate for the tee sheet and scoring server
// This file exposes the public API for integration tests

pub mod course;
pub mod event;
pub mod group;
pub mod player;
pub mod scoring;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use course::{CourseModel, HoleModel};
pub use event::{EventModel, EventStatus};
pub use group::GroupModel;
pub use player::PlayerModel;
pub use scoring::{
    aggregate, evaluate_skins, net_score, rank, stroke_allowance, ScoreModel, ScoreService,
};
pub use shared::{AppError, AppState};

// Public API - what other modules can use
pub use handlers::{create_session, validate_session};
pub use middleware::{jwt_auth, require_admin};
pub use types::{SessionClaims, SessionCreateRequest, SessionResponse};

// Internal modules
mod generators;
mod handlers;
mod middleware;
pub mod models;
pub mod repository;
pub mod service;
mod token;
mod types;

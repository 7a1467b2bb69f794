use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teesheet::course::repository::InMemoryCourseRepository;
use teesheet::event::repository::InMemoryEventRepository;
use teesheet::group::repository::InMemoryGroupRepository;
use teesheet::player::repository::InMemoryPlayerRepository;
use teesheet::scoring::repository::InMemoryScoreRepository;
use teesheet::session::repository::InMemorySessionRepository;
// use teesheet::scoring::repository::PostgresScoreRepository; // For production
// use teesheet::session::repository::PostgresSessionRepository; // For production
use teesheet::{course, event, group, player, scoring, session};
use teesheet::shared::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teesheet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tee sheet and scoring server");

    // Create shared application state with dependency injection
    // Easy to switch between implementations:
    let session_repository = Arc::new(InMemorySessionRepository::new());
    let player_repository = Arc::new(InMemoryPlayerRepository::new());
    let course_repository = Arc::new(InMemoryCourseRepository::new());
    let event_repository = Arc::new(InMemoryEventRepository::new());
    let group_repository = Arc::new(InMemoryGroupRepository::new());
    let score_repository = Arc::new(InMemoryScoreRepository::new());

    // For production with PostgreSQL:
    // let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    // let pool = sqlx::PgPool::connect(&database_url).await.expect("Failed to connect to database");
    // let session_repository = Arc::new(PostgresSessionRepository::new(pool.clone()));
    // let score_repository = Arc::new(PostgresScoreRepository::new(pool));

    let app_state = AppState::new(
        session_repository,
        player_repository,
        course_repository,
        event_repository,
        group_repository,
        score_repository,
    );

    // Admin-only writes: jwt_auth resolves the session, require_admin gates
    // on the claims it inserted
    let admin_routes = Router::new()
        .route("/events", post(event::handlers::create_event))
        .route("/events/:id", put(event::handlers::update_event))
        .route("/courses", post(course::handlers::create_course))
        .route("/groups", post(group::handlers::create_group))
        .route(
            "/groups/:id",
            put(group::handlers::update_group).delete(group::handlers::delete_group),
        )
        .route(
            "/groups/:id/toggle-lock",
            post(group::handlers::toggle_lock),
        )
        .layer(middleware::from_fn(session::require_admin))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            session::jwt_auth,
        ));

    // Authenticated routes: any valid session
    let authed_routes = Router::new()
        .route("/session/validate", get(session::validate_session))
        .route("/scores", put(scoring::handlers::submit_score))
        .route("/events/:id/join", post(event::handlers::join_event))
        .route("/players", post(player::handlers::create_player))
        .route("/players/:id", put(player::handlers::update_player))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            session::jwt_auth,
        ));

    // Public reads plus session creation
    let public_routes = Router::new()
        .route("/session", post(session::create_session))
        .route("/events", get(event::handlers::list_events))
        .route("/events/:id", get(event::handlers::get_event))
        .route("/events/:id/groups", get(group::handlers::list_groups))
        .route(
            "/events/:id/scorecard",
            get(scoring::handlers::get_scorecard),
        )
        .route(
            "/events/:id/leaderboard",
            get(scoring::handlers::get_leaderboard),
        )
        .route("/events/:id/skins", get(scoring::handlers::get_skins))
        .route("/courses", get(course::handlers::list_courses))
        .route("/courses/:id", get(course::handlers::get_course))
        .route("/players", get(player::handlers::list_players))
        .route("/players/:id", get(player::handlers::get_player))
        .route("/groups/:id", get(group::handlers::get_group));

    let app = Router::new()
        .merge(public_routes)
        .merge(authed_routes)
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // run our app with hyper, listening globally on port 3000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

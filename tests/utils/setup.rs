use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceExt;

use teesheet::course::repository::InMemoryCourseRepository;
use teesheet::course::types::CourseResponse;
use teesheet::event::repository::InMemoryEventRepository;
use teesheet::event::types::EventResponse;
use teesheet::group::repository::InMemoryGroupRepository;
use teesheet::group::types::GroupResponse;
use teesheet::player::repository::InMemoryPlayerRepository;
use teesheet::player::types::PlayerResponse;
use teesheet::scoring::repository::InMemoryScoreRepository;
use teesheet::session::repository::InMemorySessionRepository;
use teesheet::session::SessionResponse;
use teesheet::shared::AppState;
use teesheet::{course, event, group, player, scoring, session};

pub const ADMIN_KEY: &str = "integration-admin-key";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A fully wired application driven through its HTTP surface, seeded via the
/// same admin endpoints production uses. Holds one admin session and one
/// player session per seeded player.
pub struct TestApp {
    pub app: Router,
    pub admin_token: String,
    pub event_id: String,
    pub group_id: String,
    /// Seeded player name -> (player id, session token)
    pub players: HashMap<String, (String, String)>,
}

pub struct TestAppBuilder {
    players: Vec<(String, Option<f64>)>,
    holes: u8,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            holes: 18,
        }
    }

    pub fn with_player(mut self, name: &str, handicap: Option<f64>) -> Self {
        self.players.push((name.to_string(), handicap));
        self
    }

    /// alice plays off 9, bob has no handicap
    pub fn with_alice_and_bob(self) -> Self {
        self.with_player("alice", Some(9.0)).with_player("bob", None)
    }

    pub fn with_nine_holes(mut self) -> Self {
        self.holes = 9;
        self
    }

    pub async fn build(self) -> TestApp {
        // The session service reads the admin secret from the environment
        std::env::set_var("ADMIN_KEY", ADMIN_KEY);

        let app_state = AppState::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryPlayerRepository::new()),
            Arc::new(InMemoryCourseRepository::new()),
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(InMemoryGroupRepository::new()),
            Arc::new(InMemoryScoreRepository::new()),
        );
        let app = router(app_state);

        // Admin session to seed with
        let admin: SessionResponse = post_json(
            &app,
            "/session",
            None,
            &format!(r#"{{"name": "organizer", "admin_key": "{}"}}"#, ADMIN_KEY),
        )
        .await;
        assert!(admin.is_admin);
        let admin_token = admin.session_id;

        // Course: hole N has handicap rank N, everything a par 4
        let hole_specs: Vec<String> = (1..=self.holes)
            .map(|n| format!(r#"{{"number": {n}, "par": 4, "handicap_rank": {n}}}"#))
            .collect();
        let course: CourseResponse = post_json(
            &app,
            "/courses",
            Some(&admin_token),
            &format!(
                r#"{{"name": "Test Links", "address": null, "holes": [{}]}}"#,
                hole_specs.join(", ")
            ),
        )
        .await;

        let event: EventResponse = post_json(
            &app,
            "/events",
            Some(&admin_token),
            &format!(
                r#"{{"name": "Integration Open", "date": "2026-09-12T08:00:00Z", "course_id": "{}", "max_players": 16}}"#,
                course.id
            ),
        )
        .await;

        // Players: registered, given their own sessions, joined to the event
        let mut players = HashMap::new();
        let mut player_ids = Vec::new();
        for (name, handicap) in &self.players {
            let session: SessionResponse = post_json(
                &app,
                "/session",
                None,
                &format!(r#"{{"name": "{name}"}}"#),
            )
            .await;
            let token = session.session_id;

            let handicap_json = match handicap {
                Some(h) => h.to_string(),
                None => "null".to_string(),
            };
            let player: PlayerResponse = post_json(
                &app,
                "/players",
                Some(&token),
                &format!(r#"{{"name": "{name}", "handicap": {handicap_json}, "email": null}}"#),
            )
            .await;

            let _: EventResponse = post_json(
                &app,
                &format!("/events/{}/join", event.id),
                Some(&token),
                &format!(r#"{{"player_id": "{}"}}"#, player.id),
            )
            .await;

            player_ids.push(player.id.clone());
            players.insert(name.clone(), (player.id, token));
        }

        let member_json: Vec<String> = player_ids.iter().map(|id| format!(r#""{id}""#)).collect();
        let group: GroupResponse = post_json(
            &app,
            "/groups",
            Some(&admin_token),
            &format!(
                r#"{{"event_id": "{}", "group_number": 1, "tee_time": "2026-09-12T08:00:00Z", "player_ids": [{}]}}"#,
                event.id,
                member_json.join(", ")
            ),
        )
        .await;

        TestApp {
            app,
            admin_token,
            event_id: event.id,
            group_id: group.id,
            players,
        }
    }
}

/// The production route table, rebuilt here because `main` owns the binary's
/// copy. Layering must match: admin writes behind jwt_auth + require_admin,
/// member writes behind jwt_auth, reads public.
fn router(app_state: AppState) -> Router {
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

    Router::new()
        .merge(public_routes)
        .merge(authed_routes)
        .merge(admin_routes)
        .with_state(app_state)
}

impl TestApp {
    pub fn player_id(&self, name: &str) -> &str {
        &self.players[name].0
    }

    pub fn player_token(&self, name: &str) -> &str {
        &self.players[name].1
    }
}

// ============================================================================
// Raw HTTP helpers
// ============================================================================

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json<T: serde::de::DeserializeOwned>(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: &str,
) -> T {
    let response = send(app, request("POST", uri, token, Some(body.to_string()))).await;
    assert_eq!(response.status(), StatusCode::OK, "POST {uri} failed");
    body_json(response).await
}

use axum::http::StatusCode;

use teesheet::group::types::GroupResponse;
use teesheet::scoring::types::{
    LeaderboardResponse, ScorecardResponse, SkinsResponse, SubmitScoreResponse,
};

use super::setup::{body_json, request, send, TestApp};

// ============================================================================
// Domain-level actions driven through the HTTP surface
// ============================================================================

impl TestApp {
    /// Submits a gross score for one hole as the named player, expecting 200
    pub async fn submit(&self, player: &str, hole: u8, gross: u8) -> SubmitScoreResponse {
        let response = self.try_submit(player, hole, Some(gross)).await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "submit for {player} on hole {hole} failed"
        );
        body_json(response).await
    }

    /// Blanks the named player's box on one hole, expecting 200
    pub async fn blank(&self, player: &str, hole: u8) -> SubmitScoreResponse {
        let response = self.try_submit(player, hole, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    /// Raw submission: returns the response so callers can assert rejections
    pub async fn try_submit(
        &self,
        player: &str,
        hole: u8,
        gross: Option<u8>,
    ) -> axum::response::Response {
        let gross_json = match gross {
            Some(g) => g.to_string(),
            None => "null".to_string(),
        };
        let body = format!(
            r#"{{"event_id": "{}", "group_id": "{}", "player_id": "{}", "hole_number": {}, "gross": {}}}"#,
            self.event_id,
            self.group_id,
            self.player_id(player),
            hole,
            gross_json
        );
        send(
            &self.app,
            request("PUT", "/scores", Some(self.player_token(player)), Some(body)),
        )
        .await
    }

    pub async fn toggle_lock(&self) -> GroupResponse {
        let uri = format!("/groups/{}/toggle-lock", self.group_id);
        let response = send(
            &self.app,
            request("POST", &uri, Some(&self.admin_token), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    /// Attempts the lock toggle with an arbitrary token, returning the raw
    /// response for authorization assertions
    pub async fn try_toggle_lock(&self, token: &str) -> axum::response::Response {
        let uri = format!("/groups/{}/toggle-lock", self.group_id);
        send(&self.app, request("POST", &uri, Some(token), None)).await
    }

    pub async fn scorecard(&self) -> ScorecardResponse {
        let uri = format!("/events/{}/scorecard", self.event_id);
        let response = send(&self.app, request("GET", &uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    pub async fn leaderboard(&self) -> LeaderboardResponse {
        let uri = format!("/events/{}/leaderboard", self.event_id);
        let response = send(&self.app, request("GET", &uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    pub async fn skins(&self) -> SkinsResponse {
        let uri = format!("/events/{}/skins", self.event_id);
        let response = send(&self.app, request("GET", &uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }
}

use serde::{Deserialize, Serialize};

/// JWT claims structure containing session information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub session_id: String,
    pub username: String,
    pub is_admin: bool,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}

/// Request payload for creating a session.
/// Both fields are optional: a missing name gets a generated one,
/// a matching admin key grants admin capability.
#[derive(Debug, Default, Deserialize)]
pub struct SessionCreateRequest {
    pub name: Option<String>,
    pub admin_key: Option<String>,
}

/// Response structure for session creation endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub session_id: String, // The JWT token
    pub username: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_session_claims_serialization() {
        let claims = SessionClaims {
            session_id: "test-id".to_string(),
            username: "test-user".to_string(),
            is_admin: false,
            exp: 1234567890,
            iat: 1234567800,
        };

        // Should serialize to JSON
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("test-id"));
        assert!(json.contains("test-user"));

        // Should deserialize from JSON
        let deserialized: SessionClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, claims);
    }

    #[test]
    fn test_session_create_request_defaults() {
        let request: SessionCreateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.admin_key.is_none());
    }
}

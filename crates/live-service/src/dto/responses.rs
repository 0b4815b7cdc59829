//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. A response never
//! exposes a raw foreign key; related entities are always nested.

use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Per-user display preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeResponse {
    pub id: i64,
    pub dark_mode: bool,
}

/// User with theme and avatar hash resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub theme: ThemeResponse,
    /// Content hash of the avatar; the fallback constant when none uploaded.
    pub icon_hash: String,
}

// ============================================================================
// Livestream Responses
// ============================================================================

/// Category label on a livestream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

/// Livestream with its owner and tags resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamResponse {
    pub id: i64,
    pub owner: UserResponse,
    pub title: String,
    pub description: String,
    pub playlist_url: String,
    pub thumbnail_url: String,
    pub tags: Vec<TagResponse>,
    pub start_at: i64,
    pub end_at: i64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction with user and livestream fully hydrated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub emoji_name: String,
    pub user: UserResponse,
    pub livestream: LivestreamResponse,
    pub created_at: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_response_shape() {
        let response = ReactionResponse {
            id: 1,
            emoji_name: ":tada:".to_string(),
            user: UserResponse {
                id: 10,
                name: "streamer".to_string(),
                display_name: "Streamer".to_string(),
                description: String::new(),
                theme: ThemeResponse { id: 5, dark_mode: true },
                icon_hash: "abc".to_string(),
            },
            livestream: LivestreamResponse {
                id: 20,
                owner: UserResponse {
                    id: 10,
                    name: "streamer".to_string(),
                    display_name: "Streamer".to_string(),
                    description: String::new(),
                    theme: ThemeResponse { id: 5, dark_mode: true },
                    icon_hash: "abc".to_string(),
                },
                title: "t".to_string(),
                description: String::new(),
                playlist_url: String::new(),
                thumbnail_url: String::new(),
                tags: vec![TagResponse { id: 1, name: "talk".to_string() }],
                start_at: 0,
                end_at: 0,
            },
            created_at: 1_700_000_000,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["emoji_name"], ":tada:");
        assert_eq!(value["user"]["theme"]["dark_mode"], true);
        assert_eq!(value["livestream"]["tags"][0]["name"], "talk");
        // Nested objects, never raw foreign keys
        assert!(value.get("user_id").is_none());
        assert!(value.get("livestream_id").is_none());
    }

    #[test]
    fn test_readiness_status() {
        assert_eq!(ReadinessResponse::ready(true).status, "ready");
        assert_eq!(ReadinessResponse::ready(false).status, "degraded");
    }
}

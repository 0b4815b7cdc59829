//! Reaction handlers
//!
//! Endpoints for livestream reactions. Extractor order is deliberate and
//! differs between the two endpoints: listing verifies the session before
//! looking at the path, while posting parses the path first so a malformed
//! id is rejected before any session or transaction work.

use axum::{extract::State, Json};
use live_service::{PostReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::{LimitQuery, LivestreamIdPath, SessionUser, StrictJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List reactions for a livestream, newest first
///
/// GET /livestreams/{livestream_id}/reaction
pub async fn list_reactions(
    State(state): State<AppState>,
    _auth: SessionUser,
    LivestreamIdPath(livestream_id): LivestreamIdPath,
    query: LimitQuery,
) -> ApiResult<Json<Vec<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let reactions = service
        .list_for_livestream(livestream_id, query.limit)
        .await?;
    Ok(Json(reactions))
}

/// Post a reaction as the authenticated user
///
/// POST /livestreams/{livestream_id}/reaction
pub async fn post_reaction(
    State(state): State<AppState>,
    LivestreamIdPath(livestream_id): LivestreamIdPath,
    auth: SessionUser,
    StrictJson(request): StrictJson<PostReactionRequest>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service
        .create(livestream_id, auth.user_id, request.emoji_name)
        .await?;
    Ok(Created(Json(reaction)))
}

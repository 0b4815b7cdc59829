//! Reaction use cases and response assembly
//!
//! The service owns the transaction that scopes one request: begun here,
//! committed on success, rolled back by drop on every error path. Listing
//! returns reactions newest-first; near-simultaneous inserts may reorder
//! under that listing because timestamps are wall-clock, not commit-order.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use tracing::{info, instrument};

use live_core::entities::Reaction;
use live_core::traits::{LivestreamLoader, ReactionStore};
use live_core::DomainError;
use live_db::PgLoader;

use crate::dto::{LivestreamResponse, ReactionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::livestream::{compose_livestream, compose_livestreams};
use super::user::{compose_user, compose_users};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List reactions for a livestream, newest first, fully hydrated.
    #[instrument(skip(self))]
    pub async fn list_for_livestream(
        &self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        let mut tx = self.ctx.begin().await?;

        let responses = {
            let mut loader = PgLoader::new(&mut tx);
            let records = loader
                .reactions_by_livestream(livestream_id, limit)
                .await?;
            compose_reactions(&mut loader, records).await?
        };

        tx.commit()
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        Ok(responses)
    }

    /// Insert a reaction for the authenticated user and return it hydrated.
    ///
    /// The re-read happens inside the transaction that performed the insert,
    /// so the response always reflects the row just written.
    #[instrument(skip(self, emoji_name))]
    pub async fn create(
        &self,
        livestream_id: i64,
        user_id: i64,
        emoji_name: String,
    ) -> ServiceResult<ReactionResponse> {
        let created_at = Utc::now().timestamp();
        let mut tx = self.ctx.begin().await?;

        let response = {
            let mut loader = PgLoader::new(&mut tx);
            let id = loader
                .insert_reaction(user_id, livestream_id, &emoji_name, created_at)
                .await?;
            let record = Reaction {
                id,
                emoji_name,
                user_id,
                livestream_id,
                created_at,
            };
            compose_reaction(&mut loader, record).await?
        };

        tx.commit()
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        info!(
            reaction_id = response.id,
            livestream_id, user_id, "Reaction created"
        );

        Ok(response)
    }
}

/// Resolve a single reaction's user and livestream into a response object.
///
/// Both dependencies are scalar lookups; any failed resolution aborts the
/// whole operation.
pub async fn compose_reaction<L>(
    loader: &mut L,
    reaction: Reaction,
) -> ServiceResult<ReactionResponse>
where
    L: LivestreamLoader + ?Sized,
{
    let user = loader.user_by_id(reaction.user_id).await?;
    let user = compose_user(loader, user).await?;

    let livestream = loader.livestream_by_id(reaction.livestream_id).await?;
    let livestream = compose_livestream(loader, livestream).await?;

    Ok(ReactionResponse {
        id: reaction.id,
        emoji_name: reaction.emoji_name,
        user,
        livestream,
        created_at: reaction.created_at,
    })
}

/// Resolve many reactions at once.
///
/// Issues at most one bulk query per related entity type (users, themes,
/// icon hashes, livestreams) regardless of input size — never one round of
/// scalar lookups per record. Output order exactly mirrors input order, and
/// an empty input returns empty without touching the store. Any failed bulk
/// step aborts the batch; partial results are never returned.
pub async fn compose_reactions<L>(
    loader: &mut L,
    reactions: Vec<Reaction>,
) -> ServiceResult<Vec<ReactionResponse>>
where
    L: LivestreamLoader + ?Sized,
{
    if reactions.is_empty() {
        return Ok(Vec::new());
    }

    let user_ids: Vec<i64> = reactions.iter().map(|r| r.user_id).collect();
    let users = compose_users(loader, &user_ids).await?;

    let livestream_ids: Vec<i64> = reactions
        .iter()
        .map(|r| r.livestream_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let streams = loader.livestreams_by_ids(&livestream_ids).await?;
    let streams = compose_livestreams(loader, streams).await?;
    let stream_map: HashMap<i64, LivestreamResponse> =
        streams.into_iter().map(|s| (s.id, s)).collect();

    let mut responses = Vec::with_capacity(reactions.len());
    for reaction in reactions {
        let user = users
            .get(&reaction.user_id)
            .cloned()
            .ok_or(DomainError::RelationMissing {
                entity: "user",
                id: reaction.user_id,
            })?;
        let livestream = stream_map
            .get(&reaction.livestream_id)
            .cloned()
            .ok_or(DomainError::RelationMissing {
                entity: "livestream",
                id: reaction.livestream_id,
            })?;

        responses.push(ReactionResponse {
            id: reaction.id,
            emoji_name: reaction.emoji_name,
            user,
            livestream,
            created_at: reaction.created_at,
        });
    }

    Ok(responses)
}

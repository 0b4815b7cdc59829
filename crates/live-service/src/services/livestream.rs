//! Livestream response assembly
//!
//! A livestream response nests its owner (resolved through the user
//! assembler) and its tags. The batch variant keeps the one-bulk-query-per
//! -entity-type discipline: one tags query for all streams, and the user
//! assembler's three bulk queries for all owners.

use std::collections::HashMap;

use live_core::entities::Livestream;
use live_core::traits::LivestreamLoader;
use live_core::DomainError;

use crate::dto::{LivestreamResponse, TagResponse};

use super::error::ServiceResult;
use super::user::{compose_user, compose_users};

/// Resolve a single livestream's owner and tags into a response object.
pub async fn compose_livestream<L>(
    loader: &mut L,
    livestream: Livestream,
) -> ServiceResult<LivestreamResponse>
where
    L: LivestreamLoader + ?Sized,
{
    let owner = loader.user_by_id(livestream.user_id).await?;
    let owner = compose_user(loader, owner).await?;

    let tags = loader
        .tags_by_livestream_ids(&[livestream.id])
        .await?
        .into_iter()
        .map(|(_, tag)| TagResponse::from(tag))
        .collect();

    Ok(LivestreamResponse {
        id: livestream.id,
        owner,
        title: livestream.title,
        description: livestream.description,
        playlist_url: livestream.playlist_url,
        thumbnail_url: livestream.thumbnail_url,
        tags,
        start_at: livestream.start_at,
        end_at: livestream.end_at,
    })
}

/// Resolve many livestreams at once, preserving input order.
pub async fn compose_livestreams<L>(
    loader: &mut L,
    livestreams: Vec<Livestream>,
) -> ServiceResult<Vec<LivestreamResponse>>
where
    L: LivestreamLoader + ?Sized,
{
    if livestreams.is_empty() {
        return Ok(Vec::new());
    }

    let owner_ids: Vec<i64> = livestreams.iter().map(|l| l.user_id).collect();
    let owners = compose_users(loader, &owner_ids).await?;

    let stream_ids: Vec<i64> = livestreams.iter().map(|l| l.id).collect();
    let mut tag_map: HashMap<i64, Vec<TagResponse>> = HashMap::new();
    for (livestream_id, tag) in loader.tags_by_livestream_ids(&stream_ids).await? {
        tag_map
            .entry(livestream_id)
            .or_default()
            .push(TagResponse::from(tag));
    }

    let mut responses = Vec::with_capacity(livestreams.len());
    for livestream in livestreams {
        let owner = owners
            .get(&livestream.user_id)
            .cloned()
            .ok_or(DomainError::RelationMissing {
                entity: "user",
                id: livestream.user_id,
            })?;
        let tags = tag_map.remove(&livestream.id).unwrap_or_default();

        responses.push(LivestreamResponse {
            id: livestream.id,
            owner,
            title: livestream.title,
            description: livestream.description,
            playlist_url: livestream.playlist_url,
            thumbnail_url: livestream.thumbnail_url,
            tags,
            start_at: livestream.start_at,
            end_at: livestream.end_at,
        });
    }

    Ok(responses)
}

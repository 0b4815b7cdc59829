//! Loader traits (ports) - the interface between response assembly and the
//! relational store.
//!
//! The domain layer defines what it needs to read, and the persistence layer
//! provides the implementation. Methods take `&mut self` because the
//! production implementation borrows the single database transaction owned by
//! the enclosing request; every call within one request observes the same
//! transactional snapshot.
//!
//! Two retrieval shapes exist throughout:
//! - scalar-by-id: exactly one row expected, zero rows is a not-found domain
//!   error;
//! - bulk-by-id-list: one query for N ids, missing ids simply yield no row,
//!   and an empty id set must return empty without touching the store.

use async_trait::async_trait;

use crate::entities::{IconHash, Livestream, Reaction, Tag, Theme, User};
use crate::error::DomainError;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, DomainError>;

// ============================================================================
// User Loader
// ============================================================================

#[async_trait]
pub trait UserLoader: Send {
    /// Fetch a single user. Zero rows is `DomainError::UserNotFound`.
    async fn user_by_id(&mut self, id: i64) -> LoadResult<User>;

    /// Fetch all users matching the given ids in one query.
    async fn users_by_ids(&mut self, ids: &[i64]) -> LoadResult<Vec<User>>;

    /// Fetch the theme owned by a single user. Themes are keyed by the owning
    /// user, not by their own id. Zero rows is `DomainError::ThemeNotFound`.
    async fn theme_by_user_id(&mut self, user_id: i64) -> LoadResult<Theme>;

    /// Fetch all themes owned by the given users in one query.
    async fn themes_by_user_ids(&mut self, user_ids: &[i64]) -> LoadResult<Vec<Theme>>;

    /// Fetch the avatar content hash for a single user. Absence is valid.
    async fn icon_hash_by_user_id(&mut self, user_id: i64) -> LoadResult<Option<String>>;

    /// Fetch avatar content hashes for the given users in one query, joined
    /// through the icon table and keyed by the owning user.
    async fn icon_hashes_by_user_ids(&mut self, user_ids: &[i64]) -> LoadResult<Vec<IconHash>>;
}

// ============================================================================
// Livestream Loader
// ============================================================================

#[async_trait]
pub trait LivestreamLoader: UserLoader {
    /// Fetch a single livestream. Zero rows is `DomainError::LivestreamNotFound`.
    async fn livestream_by_id(&mut self, id: i64) -> LoadResult<Livestream>;

    /// Fetch all livestreams matching the given ids in one query.
    async fn livestreams_by_ids(&mut self, ids: &[i64]) -> LoadResult<Vec<Livestream>>;

    /// Fetch the tags attached to the given livestreams in one query, as
    /// `(livestream_id, tag)` pairs.
    async fn tags_by_livestream_ids(
        &mut self,
        livestream_ids: &[i64],
    ) -> LoadResult<Vec<(i64, Tag)>>;
}

// ============================================================================
// Reaction Store
// ============================================================================

#[async_trait]
pub trait ReactionStore: LivestreamLoader {
    /// List reactions for a livestream, newest first. Ties on `created_at`
    /// fall to whatever stable order the store returns (unspecified).
    async fn reactions_by_livestream(
        &mut self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> LoadResult<Vec<Reaction>>;

    /// Insert one reaction row and return its newly assigned id.
    async fn insert_reaction(
        &mut self,
        user_id: i64,
        livestream_id: i64,
        emoji_name: &str,
        created_at: i64,
    ) -> LoadResult<i64>;
}

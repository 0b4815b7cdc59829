//! PostgreSQL implementation of ReactionStore

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::Reaction;
use live_core::traits::{LoadResult, ReactionStore};

use crate::models::ReactionModel;

use super::error::map_db_error;
use super::loader::PgLoader;

#[async_trait]
impl ReactionStore for PgLoader<'_> {
    #[instrument(skip(self))]
    async fn reactions_by_livestream(
        &mut self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> LoadResult<Vec<Reaction>> {
        let results = match limit {
            Some(limit) => {
                sqlx::query_as::<_, ReactionModel>(
                    r"
                    SELECT id, emoji_name, user_id, livestream_id, created_at
                    FROM reactions
                    WHERE livestream_id = $1
                    ORDER BY created_at DESC
                    LIMIT $2
                    ",
                )
                .bind(livestream_id)
                .bind(limit)
                .fetch_all(&mut *self.conn)
                .await
            }
            None => {
                sqlx::query_as::<_, ReactionModel>(
                    r"
                    SELECT id, emoji_name, user_id, livestream_id, created_at
                    FROM reactions
                    WHERE livestream_id = $1
                    ORDER BY created_at DESC
                    ",
                )
                .bind(livestream_id)
                .fetch_all(&mut *self.conn)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self, emoji_name))]
    async fn insert_reaction(
        &mut self,
        user_id: i64,
        livestream_id: i64,
        emoji_name: &str,
        created_at: i64,
    ) -> LoadResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO reactions (emoji_name, user_id, livestream_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(emoji_name)
        .bind(user_id)
        .bind(livestream_id)
        .bind(created_at)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }
}

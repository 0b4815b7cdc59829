//! PostgreSQL implementation of LivestreamLoader

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::{Livestream, Tag};
use live_core::traits::{LivestreamLoader, LoadResult};

use crate::models::{LivestreamModel, StreamTagModel};

use super::error::{livestream_not_found, map_db_error};
use super::loader::PgLoader;

#[async_trait]
impl LivestreamLoader for PgLoader<'_> {
    #[instrument(skip(self))]
    async fn livestream_by_id(&mut self, id: i64) -> LoadResult<Livestream> {
        let result = sqlx::query_as::<_, LivestreamModel>(
            r"
            SELECT id, user_id, title, description, playlist_url, thumbnail_url,
                   start_at, end_at
            FROM livestreams
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        result
            .map(Livestream::from)
            .ok_or_else(|| livestream_not_found(id))
    }

    #[instrument(skip(self, ids))]
    async fn livestreams_by_ids(&mut self, ids: &[i64]) -> LoadResult<Vec<Livestream>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, LivestreamModel>(
            r"
            SELECT id, user_id, title, description, playlist_url, thumbnail_url,
                   start_at, end_at
            FROM livestreams
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Livestream::from).collect())
    }

    #[instrument(skip(self, livestream_ids))]
    async fn tags_by_livestream_ids(
        &mut self,
        livestream_ids: &[i64],
    ) -> LoadResult<Vec<(i64, Tag)>> {
        if livestream_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, StreamTagModel>(
            r"
            SELECT lt.livestream_id, t.id AS tag_id, t.name AS tag_name
            FROM livestream_tags AS lt
            JOIN tags AS t ON t.id = lt.tag_id
            WHERE lt.livestream_id = ANY($1)
            ",
        )
        .bind(livestream_ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

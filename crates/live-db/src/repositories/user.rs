//! PostgreSQL implementation of UserLoader

use async_trait::async_trait;
use tracing::instrument;

use live_core::entities::{IconHash, Theme, User};
use live_core::traits::{LoadResult, UserLoader};

use crate::models::{ThemeModel, UserIconHashModel, UserModel};

use super::error::{map_db_error, theme_not_found, user_not_found};
use super::loader::PgLoader;

#[async_trait]
impl UserLoader for PgLoader<'_> {
    #[instrument(skip(self))]
    async fn user_by_id(&mut self, id: i64) -> LoadResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, display_name, description
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self, ids))]
    async fn users_by_ids(&mut self, ids: &[i64]) -> LoadResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, display_name, description
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn theme_by_user_id(&mut self, user_id: i64) -> LoadResult<Theme> {
        let result = sqlx::query_as::<_, ThemeModel>(
            r"
            SELECT id, user_id, dark_mode
            FROM themes
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        result
            .map(Theme::from)
            .ok_or_else(|| theme_not_found(user_id))
    }

    #[instrument(skip(self, user_ids))]
    async fn themes_by_user_ids(&mut self, user_ids: &[i64]) -> LoadResult<Vec<Theme>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ThemeModel>(
            r"
            SELECT id, user_id, dark_mode
            FROM themes
            WHERE user_id = ANY($1)
            ",
        )
        .bind(user_ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Theme::from).collect())
    }

    #[instrument(skip(self))]
    async fn icon_hash_by_user_id(&mut self, user_id: i64) -> LoadResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT h.hash
            FROM icon_hashes AS h
            JOIN icons AS i ON i.id = h.icon_id
            WHERE i.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user_ids))]
    async fn icon_hashes_by_user_ids(&mut self, user_ids: &[i64]) -> LoadResult<Vec<IconHash>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, UserIconHashModel>(
            r"
            SELECT i.user_id, h.hash
            FROM icon_hashes AS h
            JOIN icons AS i ON i.id = h.icon_id
            WHERE i.user_id = ANY($1)
            ",
        )
        .bind(user_ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(IconHash::from).collect())
    }
}

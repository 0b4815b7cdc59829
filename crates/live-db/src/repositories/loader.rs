//! Transaction-scoped PostgreSQL loader

use sqlx::PgConnection;

/// PostgreSQL implementation of the loader traits.
///
/// Borrows the connection of the request's transaction, so every lookup made
/// through one `PgLoader` sees the same transactional snapshot; the insert on
/// the write path is visible to the re-read that follows it.
pub struct PgLoader<'c> {
    pub(super) conn: &'c mut PgConnection,
}

impl<'c> PgLoader<'c> {
    /// Create a loader over a borrowed connection (typically `&mut *tx`).
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

//! User database models

use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
}

/// Database model for the themes table
#[derive(Debug, Clone, FromRow)]
pub struct ThemeModel {
    pub id: i64,
    pub user_id: i64,
    pub dark_mode: bool,
}

/// Icon hash joined through the icons table, keyed by owning user (from query)
#[derive(Debug, Clone, FromRow)]
pub struct UserIconHashModel {
    pub user_id: i64,
    pub hash: String,
}

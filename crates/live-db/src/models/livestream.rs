//! Livestream database models

use sqlx::FromRow;

/// Database model for the livestreams table
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub playlist_url: String,
    pub thumbnail_url: String,
    pub start_at: i64,
    pub end_at: i64,
}

/// Tag joined to its livestream through livestream_tags (from query)
#[derive(Debug, Clone, FromRow)]
pub struct StreamTagModel {
    pub livestream_id: i64,
    pub tag_id: i64,
    pub tag_name: String,
}

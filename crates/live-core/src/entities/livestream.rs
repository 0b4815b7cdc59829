//! Livestream entity

/// A scheduled or running stream. Referenced by reactions; hydrated into a
/// nested response object together with its owner and tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Livestream {
    pub id: i64,
    /// Owning streamer.
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub playlist_url: String,
    pub thumbnail_url: String,
    /// Scheduled start, seconds since the Unix epoch.
    pub start_at: i64,
    /// Scheduled end, seconds since the Unix epoch.
    pub end_at: i64,
}

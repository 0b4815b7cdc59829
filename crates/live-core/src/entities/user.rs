//! User entity and its per-user satellite records (theme, icon hash)

/// Hash served for users that never uploaded an avatar image.
///
/// Clients use the hash for cache invalidation, so the absence of an icon
/// still has to map to a stable, well-known value.
pub const FALLBACK_ICON_HASH: &str =
    "d9f8294e9d895f81ce62e73dc7d5dff862a4fa40bd4e0fecf53f6526a8edcac0";

/// A viewer or streamer account. Owned by the user-management flow and
/// read-only in this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
}

/// Per-user display preference. Exactly one row per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: i64,
    pub user_id: i64,
    pub dark_mode: bool,
}

/// Content hash of a user's uploaded avatar, keyed by the owning user.
/// Zero-or-one per user; absence falls back to [`FALLBACK_ICON_HASH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHash {
    pub user_id: i64,
    pub hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_hash_is_sha256_shaped() {
        assert_eq!(FALLBACK_ICON_HASH.len(), 64);
        assert!(FALLBACK_ICON_HASH.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

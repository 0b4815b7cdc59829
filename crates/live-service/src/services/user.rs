//! User response assembly
//!
//! A user response composes three sources: the user row (required), the theme
//! row keyed by the owning user (required), and the icon hash (optional, with
//! a well-known fallback). The batch variant issues exactly one bulk query
//! per source regardless of how many users are requested.

use std::collections::{BTreeSet, HashMap};

use live_core::entities::{IconHash, Theme, User, FALLBACK_ICON_HASH};
use live_core::traits::UserLoader;
use live_core::DomainError;

use crate::dto::{ThemeResponse, UserResponse};

use super::error::ServiceResult;

/// Resolve a single user's theme and icon hash into a response object.
pub async fn compose_user<L>(loader: &mut L, user: User) -> ServiceResult<UserResponse>
where
    L: UserLoader + ?Sized,
{
    let theme = loader.theme_by_user_id(user.id).await?;
    let icon_hash = loader
        .icon_hash_by_user_id(user.id)
        .await?
        .unwrap_or_else(|| FALLBACK_ICON_HASH.to_string());

    Ok(UserResponse {
        id: user.id,
        name: user.name,
        display_name: user.display_name,
        description: user.description,
        theme: ThemeResponse::from(theme),
        icon_hash,
    })
}

/// Resolve many users at once, keyed by user id.
///
/// Duplicate ids are collapsed before querying; one bulk query each for
/// users, themes, and icon hashes is issued, independent of input size. An
/// empty input returns an empty map without touching the store.
pub async fn compose_users<L>(
    loader: &mut L,
    user_ids: &[i64],
) -> ServiceResult<HashMap<i64, UserResponse>>
where
    L: UserLoader + ?Sized,
{
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let distinct: Vec<i64> = user_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let users = loader.users_by_ids(&distinct).await?;
    let themes = loader.themes_by_user_ids(&distinct).await?;
    let icon_hashes = loader.icon_hashes_by_user_ids(&distinct).await?;

    Ok(build_user_map(&distinct, users, themes, icon_hashes)?)
}

/// Join the three bulk results into a response map in one pass.
///
/// A missing user or theme row for a requested id is a data-integrity
/// failure (foreign-key discipline says it cannot happen) and fails the
/// whole batch. A missing icon hash is valid and falls back.
fn build_user_map(
    requested: &[i64],
    users: Vec<User>,
    themes: Vec<Theme>,
    icon_hashes: Vec<IconHash>,
) -> Result<HashMap<i64, UserResponse>, DomainError> {
    let mut user_map: HashMap<i64, User> = users.into_iter().map(|u| (u.id, u)).collect();
    let mut theme_map: HashMap<i64, Theme> =
        themes.into_iter().map(|t| (t.user_id, t)).collect();
    let mut hash_map: HashMap<i64, String> =
        icon_hashes.into_iter().map(|h| (h.user_id, h.hash)).collect();

    let mut responses = HashMap::with_capacity(requested.len());
    for &id in requested {
        let user = user_map
            .remove(&id)
            .ok_or(DomainError::RelationMissing { entity: "user", id })?;
        let theme = theme_map
            .remove(&id)
            .ok_or(DomainError::RelationMissing { entity: "theme", id })?;
        let icon_hash = hash_map
            .remove(&id)
            .unwrap_or_else(|| FALLBACK_ICON_HASH.to_string());

        responses.insert(
            id,
            UserResponse {
                id: user.id,
                name: user.name,
                display_name: user.display_name,
                description: user.description,
                theme: ThemeResponse::from(theme),
                icon_hash,
            },
        );
    }

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("user{id}"),
            display_name: format!("User {id}"),
            description: String::new(),
        }
    }

    fn theme(user_id: i64) -> Theme {
        Theme {
            id: user_id + 100,
            user_id,
            dark_mode: user_id % 2 == 0,
        }
    }

    #[test]
    fn test_build_user_map_composes_all_requested() {
        let map = build_user_map(
            &[1, 2],
            vec![user(1), user(2)],
            vec![theme(1), theme(2)],
            vec![IconHash { user_id: 1, hash: "h1".to_string() }],
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map[&1].icon_hash, "h1");
        assert_eq!(map[&1].theme.id, 101);
        assert_eq!(map[&2].name, "user2");
    }

    #[test]
    fn test_missing_icon_falls_back_to_default_hash() {
        let map = build_user_map(&[1], vec![user(1)], vec![theme(1)], Vec::new()).unwrap();
        assert_eq!(map[&1].icon_hash, FALLBACK_ICON_HASH);
        assert!(!map[&1].icon_hash.is_empty());
    }

    #[test]
    fn test_missing_user_row_is_integrity_error() {
        let err = build_user_map(&[1, 2], vec![user(1)], vec![theme(1), theme(2)], Vec::new())
            .unwrap_err();
        assert!(matches!(err, DomainError::RelationMissing { entity: "user", id: 2 }));
    }

    #[test]
    fn test_missing_theme_row_is_integrity_error() {
        let err =
            build_user_map(&[1], vec![user(1)], Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::RelationMissing { entity: "theme", id: 1 }));
    }
}

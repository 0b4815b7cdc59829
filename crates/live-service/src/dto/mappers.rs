//! Entity to DTO mappers
//!
//! Simple `From` conversions; composed objects (users with themes and icon
//! hashes, livestreams with owners and tags) are built by the assemblers in
//! `crate::services`.

use live_core::entities::{Tag, Theme};

use super::responses::{TagResponse, ThemeResponse};

impl From<&Theme> for ThemeResponse {
    fn from(theme: &Theme) -> Self {
        Self {
            id: theme.id,
            dark_mode: theme.dark_mode,
        }
    }
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self::from(&theme)
    }
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

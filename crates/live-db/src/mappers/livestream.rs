//! Livestream model <-> entity mappers

use live_core::entities::{Livestream, Tag};

use crate::models::{LivestreamModel, StreamTagModel};

impl From<LivestreamModel> for Livestream {
    fn from(model: LivestreamModel) -> Self {
        Livestream {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            playlist_url: model.playlist_url,
            thumbnail_url: model.thumbnail_url,
            start_at: model.start_at,
            end_at: model.end_at,
        }
    }
}

impl From<StreamTagModel> for (i64, Tag) {
    fn from(model: StreamTagModel) -> Self {
        (
            model.livestream_id,
            Tag {
                id: model.tag_id,
                name: model.tag_name,
            },
        )
    }
}

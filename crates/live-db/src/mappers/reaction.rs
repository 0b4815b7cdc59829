//! Reaction model <-> entity mapper

use live_core::entities::Reaction;

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            emoji_name: model.emoji_name,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            created_at: model.created_at,
        }
    }
}

//! User model <-> entity mappers

use live_core::entities::{IconHash, Theme, User};

use crate::models::{ThemeModel, UserIconHashModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            display_name: model.display_name,
            description: model.description,
        }
    }
}

impl From<ThemeModel> for Theme {
    fn from(model: ThemeModel) -> Self {
        Theme {
            id: model.id,
            user_id: model.user_id,
            dark_mode: model.dark_mode,
        }
    }
}

impl From<UserIconHashModel> for IconHash {
    fn from(model: UserIconHashModel) -> Self {
        IconHash {
            user_id: model.user_id,
            hash: model.hash,
        }
    }
}

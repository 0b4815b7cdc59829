//! Domain entities - flat records materialized from the relational store

mod livestream;
mod reaction;
mod tag;
mod user;

pub use livestream::Livestream;
pub use reaction::Reaction;
pub use tag::Tag;
pub use user::{IconHash, Theme, User, FALLBACK_ICON_HASH};

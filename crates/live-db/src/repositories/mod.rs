//! Loader implementation
//!
//! PostgreSQL implementation of the loader traits defined in live-core,
//! scoped to a borrowed database transaction. Split per domain entity:
//! `user.rs`, `livestream.rs`, and `reaction.rs` each implement one trait
//! for [`PgLoader`].

mod error;
mod livestream;
mod loader;
mod reaction;
mod user;

pub use loader::PgLoader;

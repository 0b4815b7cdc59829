//! # live-core
//!
//! Domain layer containing entities, domain errors, and the loader traits
//! that define how row data is fetched. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{IconHash, Livestream, Reaction, Tag, Theme, User, FALLBACK_ICON_HASH};
pub use error::DomainError;
pub use traits::{LivestreamLoader, LoadResult, ReactionStore, UserLoader};

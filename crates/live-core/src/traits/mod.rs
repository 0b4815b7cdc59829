//! Loader traits (ports) - define the interface for row access

mod loaders;

pub use loaders::{LivestreamLoader, LoadResult, ReactionStore, UserLoader};

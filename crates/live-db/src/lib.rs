//! # live-db
//!
//! Database layer implementing the loader traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - [`PgLoader`], the transaction-scoped implementation of the loader traits
//! - Schema migrations (`migrations/`, exposed as [`MIGRATOR`])
//!
//! ## Usage
//!
//! ```rust,ignore
//! use live_core::traits::ReactionStore;
//! use live_db::{create_pool, DatabaseConfig, PgLoader};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     let mut tx = pool.begin().await?;
//!     let mut loader = PgLoader::new(&mut tx);
//!     let reactions = loader.reactions_by_livestream(1, Some(10)).await?;
//!     drop(loader);
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, create_pool_from_env, DatabaseConfig, PgPool, MIGRATOR};
pub use repositories::PgLoader;

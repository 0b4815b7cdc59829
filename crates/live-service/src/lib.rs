//! # live-service
//!
//! Application layer: request/response DTOs and the response assemblers that
//! turn raw row records into fully-hydrated nested response objects, plus the
//! reaction use cases that own the per-request database transaction.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    HealthResponse, LivestreamResponse, PostReactionRequest, ReactionResponse, ReadinessResponse,
    TagResponse, ThemeResponse, UserResponse,
};
pub use services::{
    compose_livestream, compose_livestreams, compose_reaction, compose_reactions, compose_user,
    compose_users, ReactionService, ServiceContext, ServiceError, ServiceResult,
};

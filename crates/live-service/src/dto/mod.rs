//! Data transfer objects for API requests and responses

mod mappers;
mod requests;
mod responses;

pub use requests::PostReactionRequest;
pub use responses::{
    HealthResponse, LivestreamResponse, ReactionResponse, ReadinessResponse, TagResponse,
    ThemeResponse, UserResponse,
};

//! Axum extractors for request handling
//!
//! Custom extractors for session authentication, path/query parsing, and
//! strict JSON bodies.

mod auth;
mod body;
mod path;
mod query;

pub use auth::{SessionUser, SESSION_USER_ID_KEY};
pub use body::StrictJson;
pub use path::LivestreamIdPath;
pub use query::LimitQuery;

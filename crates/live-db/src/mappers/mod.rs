//! Model → entity mappers

mod livestream;
mod reaction;
mod user;

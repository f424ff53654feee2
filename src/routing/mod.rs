//! Routing module
//!
//! Maps a request method and path onto one of the fixed endpoints.

mod matcher;

pub use matcher::{match_route, Endpoint};

//! HTTP protocol layer module
//!
//! JSON encoding and response builders, independent of the endpoints that
//! use them.

pub mod json;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_501_response, build_error_response, build_json_response,
    build_options_response,
};

//! Request handler module
//!
//! Responsible for request routing dispatch and the coating line endpoints.

mod body;
mod endpoints;
pub mod router;

// Re-export main entry point
pub use router::handle_request;

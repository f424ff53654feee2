// Application state module
// Read-only state shared by every request

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated, so requests share it through an
/// `Arc` without locking.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

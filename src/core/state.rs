// Application state (AppState)

use crate::core::config::Config;
use crate::models::user::UserRecord;
use std::sync::Arc;

/// Shared application state
///
/// The record sequence is immutable for the process lifetime: it is seeded
/// once at startup and only ever read after that, so concurrent handlers
/// share it without locking. Tests inject alternate datasets here instead of
/// touching any process-global.
#[derive(Clone)]
pub struct AppState {
    /// The user record sequence, in canonical display order
    pub records: Arc<Vec<UserRecord>>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, records: Vec<UserRecord>) -> Self {
        Self {
            records: Arc::new(records),
            config: Arc::new(config),
        }
    }
}

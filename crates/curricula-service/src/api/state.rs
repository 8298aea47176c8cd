//! Shared state for API handlers

use crate::service::CurriculaService;
use std::sync::Arc;

/// State injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// The lifecycle service
    pub service: Arc<CurriculaService>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(service: Arc<CurriculaService>) -> Self {
        Self {
            service,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }
}

//! REST API surface

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use router::create_router;
pub use state::AppState;

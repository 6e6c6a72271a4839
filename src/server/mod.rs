//! HTTP adapter
//!
//! One route, `POST /analyze`, on a fixed port.

mod error;
mod handlers;
mod router;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{AnalyzeRequest, AnalyzeResponse};
pub use router::{AppState, build_router};

/// Port the service listens on
pub const PORT: u16 = 8080;

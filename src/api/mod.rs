//! HTTP API module for the bean calculator.
//!
//! This module serves the calculator form page and the JSON and CSV
//! endpoints behind it.

mod handlers;
mod page;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AgentRequest, CalculationRequest, ExportQuery};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;

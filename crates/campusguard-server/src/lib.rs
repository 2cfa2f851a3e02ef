//! CampusGuard HTTP service — moderation scanning over JSON.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

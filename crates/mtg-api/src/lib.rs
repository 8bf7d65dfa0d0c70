//! # MTG API
//! 
//! HTTP handlers, the session guard middleware, templates, and the router.

pub mod context;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;
pub mod templates;

pub use context::RequestContext;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

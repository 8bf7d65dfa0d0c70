//! Domain services (business logic)

pub mod auth_service;
pub mod demo_account;
pub mod idle_policy;
pub mod session_lifecycle;

pub use auth_service::AuthService;
pub use demo_account::DemoAccountPolicy;
pub use idle_policy::{parse_last_activity, IdlePolicy, SessionState, TimestampError};
pub use session_lifecycle::{ExpiryOutcome, SessionLifecycle};

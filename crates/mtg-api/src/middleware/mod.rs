//! Request pipeline middleware

pub mod session_guard;

pub use session_guard::{check_idle_timeout, refresh_session_policy, resolve_principal};

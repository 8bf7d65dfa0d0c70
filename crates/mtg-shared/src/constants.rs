//! Application-wide constants

/// Session key holding the logged-in user's id.
pub const CURRENT_USER_KEY: &str = "curr_user";
/// Session key holding the last heartbeat timestamp (RFC 3339, UTC).
pub const LAST_ACTIVITY_KEY: &str = "last_activity";

pub const DEFAULT_IDLE_TIMEOUT_MINUTES: i64 = 20;
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "mtg_session";
pub const DEMO_ACCOUNT_EMAIL: &str = "demo@example.com";
pub const DEMO_ACCOUNT_USERNAME: &str = "demo";

pub const LOGIN_PATH: &str = "/acct/login";
pub const CARD_SEARCH_PATH: &str = "/cs/card-search";

pub const DEFAULT_DATABASE_URL: &str = "postgresql:///mtg_workshop";
pub const MIN_PASSWORD_LENGTH: usize = 6;

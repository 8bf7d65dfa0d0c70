//! # MTG Security
//! 
//! Security utilities: password hashing, session cookie keys, random tokens.

pub mod password;
pub mod session;
pub mod token;

pub use password::{PasswordError, PasswordService};
pub use session::derive_cookie_key;
pub use token::generate_token;

//! # MTG Core
//! 
//! Domain entities, repository traits, and the session lifecycle services.

pub mod clock;
pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::DomainError;

//! Sliding idle-timeout policy
//!
//! A session is `Active` while `now - last_activity <= timeout` and `Expired`
//! once that elapsed time is strictly greater. Sessions that never recorded
//! activity are always `Active`.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;
use tracing::{debug, warn};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Expired,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unreadable timestamp: {0}")]
pub struct TimestampError(pub String);

/// Parse a stored `last_activity` value.
///
/// RFC 3339 values keep their offset and are converted to UTC. Values without
/// any offset are taken as UTC: the store only ever writes UTC, but older
/// writers dropped the offset on the way through.
pub fn parse_last_activity(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            debug!("last_activity {} has no offset, reading it as UTC", raw);
            return Ok(naive.and_utc());
        }
    }

    Err(TimestampError(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdlePolicy {
    timeout: TimeDelta,
}

impl IdlePolicy {
    pub fn new(timeout: TimeDelta) -> Self {
        Self { timeout }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::new(TimeDelta::minutes(minutes))
    }

    pub fn timeout(&self) -> TimeDelta {
        self.timeout
    }

    pub fn evaluate(&self, last_activity: Option<DateTime<Utc>>, now: DateTime<Utc>) -> SessionState {
        match last_activity {
            Some(last) if now - last > self.timeout => SessionState::Expired,
            _ => SessionState::Active,
        }
    }

    /// Evaluate a raw stored value. Unreadable timestamps expire the session.
    pub fn evaluate_raw(&self, raw: Option<&str>, now: DateTime<Utc>) -> SessionState {
        let Some(raw) = raw else {
            return SessionState::Active;
        };

        match parse_last_activity(raw) {
            Ok(last) => self.evaluate(Some(last), now),
            Err(e) => {
                warn!("Expiring session: {}", e);
                SessionState::Expired
            }
        }
    }
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self::from_minutes(mtg_shared::constants::DEFAULT_IDLE_TIMEOUT_MINUTES)
    }
}

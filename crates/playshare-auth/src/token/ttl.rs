//! Share link lifetimes.

use std::num::NonZeroU32;

use chrono::Duration;

use playshare_core::error::AppError;

/// A strictly positive credential lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareTtl(Duration);

impl ShareTtl {
    /// A lifetime of `days` whole days.
    pub fn days(days: NonZeroU32) -> Self {
        Self(Duration::days(i64::from(days.get())))
    }

    /// A lifetime of `days` whole days; zero is rejected.
    pub fn from_days(days: u32) -> Result<Self, AppError> {
        NonZeroU32::new(days)
            .map(Self::days)
            .ok_or_else(|| AppError::validation("Share lifetime must be a positive number of days"))
    }

    /// An arbitrary lifetime; zero or negative durations are rejected.
    pub fn new(duration: Duration) -> Result<Self, AppError> {
        if duration <= Duration::zero() {
            return Err(AppError::validation("Share lifetime must be positive"));
        }
        Ok(Self(duration))
    }

    /// The lifetime as a duration.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

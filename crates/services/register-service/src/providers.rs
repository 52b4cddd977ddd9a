//! Time and identifier capabilities.
//!
//! The pipeline never calls `Utc::now()` or `Uuid::new_v4()` directly so
//! tests can pin both.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of the current time.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh user identifiers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sara_core::clock::Clock;
use sara_core::ids::IdSource;
use sara_core::types::Timestamp;
use sara_db::Store;

/// Clock that advances by one second every time it is read.
pub struct SteppingClock {
    millis: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let millis = self.millis.fetch_add(1_000, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis).unwrap()
    }
}

/// Deterministic ids (`id-1`, `id-2`, ...) and site codes (`CODE1`, ...).
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdSource for SequentialIds {
    fn record_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn site_code(&self) -> String {
        format!("CODE{}", self.next.fetch_add(1, Ordering::SeqCst) % 10)
    }
}

/// 2026-01-01T00:00:00Z
pub const START_MILLIS: i64 = 1_767_225_600_000;

/// In-memory store with a stepping clock and sequential ids.
pub fn test_store() -> Store {
    Store::in_memory()
        .with_ids(Arc::new(SequentialIds::default()))
        .with_clock(Arc::new(SteppingClock::starting_at(START_MILLIS)))
}

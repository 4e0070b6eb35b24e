//! Identifier sources

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::domain::entities::IdEnvelope;
use crate::domain::ports::IdSource;

/// Uniform random draw inside the envelope
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self, envelope: IdEnvelope) -> i64 {
        rand::thread_rng().gen_range(envelope.start()..=envelope.end())
    }
}

/// Deterministic counter: lower bound first, then upwards, wrapping inside the envelope
#[derive(Debug, Default)]
pub struct SequenceIdSource {
    counter: AtomicU64,
}

impl SequenceIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the given position instead of the lower bound
    pub fn starting_at(position: u64) -> Self {
        Self {
            counter: AtomicU64::new(position),
        }
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&self, envelope: IdEnvelope) -> i64 {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        envelope.nth(n)
    }
}

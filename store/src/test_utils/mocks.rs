//! Mock implementations of port traits

use std::sync::{Arc, RwLock};

use crate::domain::entities::IdEnvelope;
use crate::domain::ports::IdSource;

/// Always returns the same id, clamped into the envelope
#[derive(Debug, Clone, Copy)]
pub struct FixedIdSource(pub i64);

impl IdSource for FixedIdSource {
    fn next_id(&self, envelope: IdEnvelope) -> i64 {
        envelope.clamp(self.0)
    }
}

/// Returns the lower bound and records every envelope it was asked for
#[derive(Default, Clone)]
pub struct RecordingIdSource {
    pub requests: Arc<RwLock<Vec<IdEnvelope>>>,
}

impl RecordingIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.requests.read().unwrap().len()
    }
}

impl IdSource for RecordingIdSource {
    fn next_id(&self, envelope: IdEnvelope) -> i64 {
        self.requests.write().unwrap().push(envelope);
        envelope.start()
    }
}

//! Request generations.
//!
//! Every new request takes the next generation; a response is applied only
//! if its generation is still the latest, so a slow early response can never
//! overwrite a faster later one.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct GenerationCounter(AtomicU64);

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return it. The first call returns 1.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Latest generation handed out, 0 before the first request.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current() == generation
    }
}

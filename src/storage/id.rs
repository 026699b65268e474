//! Identifier generation.
//!
//! Identifiers are fixed-width, zero-padded decimal strings (`0042`). A
//! generator only proposes a number below the store's capacity; uniqueness
//! is enforced by the store when it allocates.

use crate::config::IdStrategy;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of identifier candidates.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// A number in `0..capacity`. `capacity` is never zero.
    fn candidate(&self, capacity: u64) -> u64;
}

/// Random candidates from a generator seeded with the wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn candidate(&self, capacity: u64) -> u64 {
        let seed = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp_micros()) as u64;
        StdRng::seed_from_u64(seed).gen_range(0..capacity)
    }
}

/// Candidates `0, 1, 2, ...`, wrapping at the capacity.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn candidate(&self, capacity: u64) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) % capacity
    }
}

/// Generator for a configured strategy.
pub fn generator_for(strategy: IdStrategy) -> Arc<dyn IdGenerator> {
    match strategy {
        IdStrategy::Random => Arc::new(RandomIdGenerator),
        IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
    }
}

/// Zero-padded decimal form of `value`.
pub fn format_id(value: u64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// A random identifier of `width` digits.
///
/// Nothing checks it against existing records.
pub fn generate_id(width: usize) -> String {
    let width = width.clamp(1, crate::config::MAX_ID_WIDTH);
    format_id(RandomIdGenerator.candidate(10u64.pow(width as u32)), width)
}

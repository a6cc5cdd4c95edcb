//! Development helpers: deterministic entropy for driving the sampling
//! and signing retry loops in tests.

use core::fmt;
use rand_core::{TryCryptoRng, TryRngCore};

/// Entropy source which replays fixed 32-byte draws in order.
///
/// It can be told to fail a number of draws up front, and panics once the
/// recorded draws are exhausted so a runaway retry loop fails the test
/// instead of hanging it.
#[derive(Clone, Debug)]
pub struct ReplayRng {
    chunks: Vec<[u8; 32]>,
    next: usize,
    failures: usize,
    draws: usize,
}

/// Error returned by [`ReplayRng`] for a simulated entropy failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("simulated entropy failure")
    }
}

impl ReplayRng {
    /// Replay the given draws.
    pub fn new(chunks: &[[u8; 32]]) -> Self {
        Self {
            chunks: chunks.to_vec(),
            next: 0,
            failures: 0,
            draws: 0,
        }
    }

    /// Fail the first `count` draws.
    pub fn failing_first(mut self, count: usize) -> Self {
        self.failures = count;
        self
    }

    /// Number of draws attempted so far, failed ones included.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of recorded draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.chunks.len() - self.next
    }
}

impl TryRngCore for ReplayRng {
    type Error = Unavailable;

    fn try_next_u32(&mut self) -> Result<u32, Unavailable> {
        let mut bytes = [0u8; 4];
        self.try_fill_bytes(&mut bytes)?;
        Ok(u32::from_be_bytes(bytes))
    }

    fn try_next_u64(&mut self) -> Result<u64, Unavailable> {
        let mut bytes = [0u8; 8];
        self.try_fill_bytes(&mut bytes)?;
        Ok(u64::from_be_bytes(bytes))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Unavailable> {
        self.draws += 1;
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Unavailable);
        }

        let chunk = self
            .chunks
            .get(self.next)
            .unwrap_or_else(|| panic!("replayed entropy exhausted after {} draws", self.draws));
        assert!(dst.len() <= chunk.len(), "draw larger than a replayed chunk");
        dst.copy_from_slice(&chunk[..dst.len()]);
        self.next += 1;
        Ok(())
    }
}

impl TryCryptoRng for ReplayRng {}

//! Prize pool configuration

use super::money::Amount;

use anyhow::{ensure, Result};

/// Largest headcount accepted at setup
pub const MAX_PACKETS: usize = 100;

/// Smallest average envelope accepted at setup
pub const MIN_SHARE_AT_SETUP: Amount = 10_000;

/// Immutable description of a prize pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundSpec {
    total: Amount,
    packet_count: usize,
    min_value: Option<Amount>,
    max_value: Option<Amount>,
}

impl FundSpec {
    /// Create a fund specification, rejecting inputs the distribution engine
    /// gives no guarantees for.
    pub fn new(
        total: Amount,
        packet_count: usize,
        min_value: Option<Amount>,
        max_value: Option<Amount>,
    ) -> Result<Self> {
        ensure!(total >= 0, "total fund must not be negative, got {}", total);
        ensure!(packet_count >= 2, "need at least 2 envelopes, got {}", packet_count);

        if let Some(min) = min_value {
            ensure!(min > 0, "minimum envelope value must be positive, got {}", min);
        }
        if let Some(max) = max_value {
            ensure!(max > 0, "maximum envelope value must be positive, got {}", max);
        }
        if let (Some(min), Some(max)) = (min_value, max_value) {
            ensure!(min < max, "minimum {} must be below maximum {}", min, max);
        }

        Ok(Self {
            total,
            packet_count,
            min_value,
            max_value,
        })
    }

    /// Fund without per-envelope bounds
    pub fn unbounded(total: Amount, packet_count: usize) -> Result<Self> {
        Self::new(total, packet_count, None, None)
    }

    /// Stricter limits applied when a host sets up a game.
    pub fn validate_setup(&self) -> Result<()> {
        ensure!(self.total > 0, "the fund must be positive");
        ensure!(
            self.packet_count <= MAX_PACKETS,
            "at most {} envelopes, got {}",
            MAX_PACKETS,
            self.packet_count
        );
        ensure!(
            self.total >= self.packet_count as Amount * MIN_SHARE_AT_SETUP,
            "fund {} is too small, every envelope needs at least {} on average",
            self.total,
            MIN_SHARE_AT_SETUP
        );
        Ok(())
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn packet_count(&self) -> usize {
        self.packet_count
    }

    pub fn min_value(&self) -> Option<Amount> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<Amount> {
        self.max_value
    }
}

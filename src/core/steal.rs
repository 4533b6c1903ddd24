//! Farkle steal chain.
//!
//! When a player farkles with unbanked points, those points become a pool
//! offered to each following player in seat order. The chain is pure data:
//! every step returns the next chain value and the engine decides what to
//! do with it.

use serde::{Deserialize, Serialize};

/// An in-progress steal.
///
/// Invariant: `pool > 0` on entry and `stealer != original_farkler` for as
/// long as the chain is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealChain {
    pool: u32,
    stealer: usize,
    original_farkler: usize,
}

/// Outcome of a stealer passing the pool along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainStep {
    /// The pool moves to the next seat.
    Offered(StealChain),

    /// The chain came back around to the farkler; the pool is lost.
    Exhausted { forfeited: u32, farkler: usize },
}

impl StealChain {
    /// Open a chain for `farkler`, offering `pool` to the next seat.
    ///
    /// Callers guarantee at least two players.
    ///
    /// # Example
    ///
    /// ```rust
    /// use farkle_house::core::StealChain;
    ///
    /// let chain = StealChain::begin(1, 300, 2);
    /// assert_eq!(chain.stealer(), 0);
    /// assert_eq!(chain.pool(), 300);
    /// ```
    pub fn begin(farkler: usize, pool: u32, player_count: usize) -> Self {
        Self {
            pool,
            stealer: (farkler + 1) % player_count.max(1),
            original_farkler: farkler,
        }
    }

    pub fn pool(&self) -> u32 {
        self.pool
    }

    pub fn stealer(&self) -> usize {
        self.stealer
    }

    pub fn original_farkler(&self) -> usize {
        self.original_farkler
    }

    /// Points the current stealer banks by claiming.
    pub fn claim_total(&self, attempt_points: u32) -> u32 {
        self.pool.saturating_add(attempt_points)
    }

    /// The current stealer busts; `carried` points join the pool and the
    /// offer moves one seat on.
    pub fn pass(self, carried: u32, player_count: usize) -> ChainStep {
        let pool = self.pool.saturating_add(carried);
        let next = (self.stealer + 1) % player_count.max(1);

        if next == self.original_farkler {
            ChainStep::Exhausted {
                forfeited: pool,
                farkler: self.original_farkler,
            }
        } else {
            ChainStep::Offered(Self {
                pool,
                stealer: next,
                original_farkler: self.original_farkler,
            })
        }
    }
}

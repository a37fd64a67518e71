//! Nullable host infrastructure for deterministic testing.
//!
//! The fee module depends on the host only through the [`Ledger`],
//! [`ValidatorRewards`] and [`Treasury`] traits. This crate provides
//! in-memory implementations that:
//! - Keep balances in plain maps
//! - Record every call, in order, in a shared [`Journal`]
//! - Can be told to fail on demand
//! - Move validator and community legs out of the holding pool, so a routed
//!   fee leaves nothing behind
//!
//! Usage: build a [`NullHost`], fund the payer, and hand references to
//! `FeeKeeper::new`.
//!
//! [`Ledger`]: regen_feemodule::Ledger
//! [`ValidatorRewards`]: regen_feemodule::ValidatorRewards
//! [`Treasury`]: regen_feemodule::Treasury

pub mod journal;
pub mod ledger;
pub mod rewards;

pub use journal::{HostCall, Journal};
pub use ledger::{NullLedger, Pools};
pub use rewards::{NullTreasury, NullValidatorRewards, COMMUNITY_POOL, DISTRIBUTION_POOL};

/// All three collaborators wired to one journal and one set of pools.
pub struct NullHost {
    pub journal: Journal,
    pub ledger: NullLedger,
    pub rewards: NullValidatorRewards,
    pub treasury: NullTreasury,
}

impl NullHost {
    /// Host whose sinks draw from the default fee module pool.
    pub fn new() -> Self {
        Self::for_module(regen_feemodule::MODULE_NAME)
    }

    /// Host whose sinks draw from `holding_pool`.
    pub fn for_module(holding_pool: &str) -> Self {
        let journal = Journal::new();
        let ledger = NullLedger::with_journal(journal.clone());
        let pools = ledger.pools();
        Self {
            rewards: NullValidatorRewards::with_journal(journal.clone())
                .drawing_from(pools.clone(), holding_pool),
            treasury: NullTreasury::with_journal(journal.clone()).drawing_from(pools, holding_pool),
            ledger,
            journal,
        }
    }
}

impl Default for NullHost {
    fn default() -> Self {
        Self::new()
    }
}

//! Nullable validator-reward and community-treasury sinks.

use crate::journal::{HostCall, Journal};
use crate::ledger::Pools;
use regen_feemodule::{CollaboratorError, Context, Treasury, ValidatorRewards};
use regen_types::{AccAddress, Coin, Coins};
use std::sync::Mutex;

/// Pool that receives validator allocations.
pub const DISTRIBUTION_POOL: &str = "distribution";

/// Pool that receives community funding.
pub const COMMUNITY_POOL: &str = "community_pool";

/// Where a sink takes its coins from.
#[derive(Clone, Debug)]
struct Source {
    pools: Pools,
    from: String,
}

impl Source {
    fn draw(&self, to: &str, amount: &Coin) -> Result<(), CollaboratorError> {
        self.pools.transfer(&self.from, to, &Coins::from(amount.clone()))
    }
}

/// Records validator allocations instead of paying anyone.
///
/// Wired with [`drawing_from`](Self::drawing_from), each allocation also
/// moves the coins out of the holding pool into [`DISTRIBUTION_POOL`].
pub struct NullValidatorRewards {
    journal: Journal,
    source: Option<Source>,
    allocated: Mutex<Vec<Coin>>,
    fail_with: Mutex<Option<CollaboratorError>>,
}

impl NullValidatorRewards {
    pub fn new() -> Self {
        Self::with_journal(Journal::new())
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            source: None,
            allocated: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Debit `pool` for every allocation.
    pub fn drawing_from(mut self, pools: Pools, pool: &str) -> Self {
        self.source = Some(Source {
            pools,
            from: pool.to_string(),
        });
        self
    }

    /// Sum of successful allocations in `denom`.
    pub fn total_allocated(&self, denom: &str) -> u128 {
        self.allocated
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.denom == denom)
            .map(|c| c.amount)
            .sum()
    }

    /// Make every subsequent allocation fail with `err` (`None` to clear).
    pub fn fail_with(&self, err: Option<CollaboratorError>) {
        *self.fail_with.lock().unwrap() = err;
    }
}

impl Default for NullValidatorRewards {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorRewards for NullValidatorRewards {
    fn allocate_to_validators(&self, _ctx: &Context, amount: &Coin) -> Result<(), CollaboratorError> {
        self.journal.record(HostCall::AllocateToValidators {
            amount: amount.clone(),
        });
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        if let Some(source) = &self.source {
            source.draw(DISTRIBUTION_POOL, amount)?;
        }
        self.allocated.lock().unwrap().push(amount.clone());
        Ok(())
    }
}

/// Records community pool funding together with the depositor used.
///
/// Wired with [`drawing_from`](Self::drawing_from), each funding also moves
/// the coins out of the holding pool into [`COMMUNITY_POOL`].
pub struct NullTreasury {
    journal: Journal,
    source: Option<Source>,
    fundings: Mutex<Vec<(Coin, Option<AccAddress>)>>,
    require_depositor: Mutex<bool>,
    fail_with: Mutex<Option<CollaboratorError>>,
}

impl NullTreasury {
    pub fn new() -> Self {
        Self::with_journal(Journal::new())
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            source: None,
            fundings: Mutex::new(Vec::new()),
            require_depositor: Mutex::new(false),
            fail_with: Mutex::new(None),
        }
    }

    /// Debit `pool` for every funding.
    pub fn drawing_from(mut self, pools: Pools, pool: &str) -> Self {
        self.source = Some(Source {
            pools,
            from: pool.to_string(),
        });
        self
    }

    /// Reject funding without a depositor, like hosts whose community pool
    /// only accepts deposits from a named account.
    pub fn require_depositor(&self) {
        *self.require_depositor.lock().unwrap() = true;
    }

    pub fn total_funded(&self, denom: &str) -> u128 {
        self.fundings
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c.denom == denom)
            .map(|(c, _)| c.amount)
            .sum()
    }

    pub fn fundings(&self) -> Vec<(Coin, Option<AccAddress>)> {
        self.fundings.lock().unwrap().clone()
    }

    /// Make every subsequent funding fail with `err` (`None` to clear).
    pub fn fail_with(&self, err: Option<CollaboratorError>) {
        *self.fail_with.lock().unwrap() = err;
    }
}

impl Default for NullTreasury {
    fn default() -> Self {
        Self::new()
    }
}

impl Treasury for NullTreasury {
    fn fund_community_pool(
        &self,
        _ctx: &Context,
        amount: &Coin,
        depositor: Option<&AccAddress>,
    ) -> Result<(), CollaboratorError> {
        self.journal.record(HostCall::FundCommunityPool {
            amount: amount.clone(),
            depositor: depositor.cloned(),
        });
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        if *self.require_depositor.lock().unwrap() && depositor.is_none() {
            return Err(CollaboratorError::Other(
                "community pool deposit requires a depositor".into(),
            ));
        }
        if let Some(source) = &self.source {
            source.draw(COMMUNITY_POOL, amount)?;
        }
        self.fundings
            .lock()
            .unwrap()
            .push((amount.clone(), depositor.cloned()));
        Ok(())
    }
}

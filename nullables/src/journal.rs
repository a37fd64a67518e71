//! Ordered record of collaborator calls.

use regen_types::{AccAddress, Coin, Coins};
use std::sync::{Arc, Mutex};

/// One call made by the fee module into the host. Failed calls are recorded
/// too: the entry means "attempted", not "applied".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    TransferToModulePool {
        from: AccAddress,
        pool: String,
        amounts: Coins,
    },
    Burn {
        pool: String,
        amounts: Coins,
    },
    TransferBetweenPools {
        from_pool: String,
        to_pool: String,
        amounts: Coins,
    },
    AllocateToValidators {
        amount: Coin,
    },
    FundCommunityPool {
        amount: Coin,
        depositor: Option<AccAddress>,
    },
}

impl HostCall {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TransferToModulePool { .. } => "transfer_to_module_pool",
            Self::Burn { .. } => "burn",
            Self::TransferBetweenPools { .. } => "transfer_between_pools",
            Self::AllocateToValidators { .. } => "allocate_to_validators",
            Self::FundCommunityPool { .. } => "fund_community_pool",
        }
    }
}

/// Shared, cloneable call log.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// All calls so far (for assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Call kinds in order, e.g. `["transfer_to_module_pool", "burn"]`.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(HostCall::kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

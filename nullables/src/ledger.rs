//! Nullable ledger: in-memory accounts, module pools and burned supply.

use crate::journal::{HostCall, Journal};
use regen_feemodule::{CollaboratorError, Context, Ledger};
use regen_types::{AccAddress, Coins};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

type Balances = HashMap<String, HashMap<String, u128>>;

/// Module pool balances, shared with the reward and treasury sinks so they
/// can draw their legs out of the holding pool like real host modules do.
#[derive(Clone, Debug, Default)]
pub struct Pools(Arc<Mutex<Balances>>);

impl Pools {
    pub fn balance(&self, pool: &str, denom: &str) -> u128 {
        balance_of(&self.lock(), pool, denom)
    }

    /// Move `amounts` between pools; an overdraft moves nothing.
    pub fn transfer(
        &self,
        from: &str,
        to: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError> {
        let mut book = self.lock();
        debit_balance(&mut book, from, amounts)?;
        credit(&mut book, to, amounts);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Balances> {
        self.0.lock().unwrap()
    }
}

/// An in-memory ledger for testing.
///
/// Module pools spring into existence on first credit. Debits check the
/// balance and fail with `InsufficientFunds` exactly like a real bank.
pub struct NullLedger {
    journal: Journal,
    accounts: Mutex<Balances>,
    pools: Pools,
    burned: Mutex<HashMap<String, u128>>,
    frozen: Mutex<HashSet<String>>,
    fail_burn: Mutex<Option<CollaboratorError>>,
    fail_pool_transfer: Mutex<Option<CollaboratorError>>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::with_journal(Journal::new())
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            accounts: Mutex::new(HashMap::new()),
            pools: Pools::default(),
            burned: Mutex::new(HashMap::new()),
            frozen: Mutex::new(HashSet::new()),
            fail_burn: Mutex::new(None),
            fail_pool_transfer: Mutex::new(None),
        }
    }

    /// Credit a user account out of thin air.
    pub fn fund_account(&self, address: &AccAddress, denom: &str, amount: u128) {
        *self
            .accounts
            .lock()
            .unwrap()
            .entry(address.to_string())
            .or_default()
            .entry(denom.to_string())
            .or_default() += amount;
    }

    pub fn account_balance(&self, address: &AccAddress, denom: &str) -> u128 {
        balance_of(&self.accounts.lock().unwrap(), address.as_str(), denom)
    }

    pub fn pool_balance(&self, pool: &str, denom: &str) -> u128 {
        self.pools.balance(pool, denom)
    }

    /// Handle on the module pools for sinks that debit them.
    pub fn pools(&self) -> Pools {
        self.pools.clone()
    }

    /// Total destroyed so far in `denom`.
    pub fn burned(&self, denom: &str) -> u128 {
        self.burned.lock().unwrap().get(denom).copied().unwrap_or(0)
    }

    /// Freeze an account or pool; any debit from it fails with `Frozen`.
    pub fn freeze(&self, holder: &str) {
        self.frozen.lock().unwrap().insert(holder.to_string());
    }

    /// Make every subsequent `burn` fail with `err` (`None` to clear).
    pub fn fail_burn_with(&self, err: Option<CollaboratorError>) {
        *self.fail_burn.lock().unwrap() = err;
    }

    /// Make every subsequent `transfer_between_pools` fail with `err`.
    pub fn fail_pool_transfer_with(&self, err: Option<CollaboratorError>) {
        *self.fail_pool_transfer.lock().unwrap() = err;
    }

    fn debit(
        &self,
        book: &mut Balances,
        holder: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError> {
        if self.frozen.lock().unwrap().contains(holder) {
            return Err(CollaboratorError::Frozen(holder.to_string()));
        }
        debit_balance(book, holder, amounts)
    }
}

fn debit_balance(
    book: &mut Balances,
    holder: &str,
    amounts: &Coins,
) -> Result<(), CollaboratorError> {
    for coin in amounts.iter() {
        let available = balance_of(book, holder, &coin.denom);
        if available < coin.amount {
            return Err(CollaboratorError::InsufficientFunds {
                holder: holder.to_string(),
                denom: coin.denom.clone(),
                needed: coin.amount,
                available,
            });
        }
    }
    let entry = book.entry(holder.to_string()).or_default();
    for coin in amounts.iter() {
        *entry.entry(coin.denom.clone()).or_default() -= coin.amount;
    }
    Ok(())
}

fn balance_of(book: &Balances, holder: &str, denom: &str) -> u128 {
    book.get(holder)
        .and_then(|b| b.get(denom))
        .copied()
        .unwrap_or(0)
}

fn credit(book: &mut Balances, holder: &str, amounts: &Coins) {
    let entry = book.entry(holder.to_string()).or_default();
    for coin in amounts.iter() {
        *entry.entry(coin.denom.clone()).or_default() += coin.amount;
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for NullLedger {
    fn burn(&self, _ctx: &Context, pool: &str, amounts: &Coins) -> Result<(), CollaboratorError> {
        self.journal.record(HostCall::Burn {
            pool: pool.to_string(),
            amounts: amounts.clone(),
        });
        if let Some(err) = self.fail_burn.lock().unwrap().clone() {
            return Err(err);
        }
        let mut pools = self.pools.lock();
        if !pools.contains_key(pool) {
            return Err(CollaboratorError::UnknownPool(pool.to_string()));
        }
        self.debit(&mut pools, pool, amounts)?;
        let mut burned = self.burned.lock().unwrap();
        for coin in amounts.iter() {
            *burned.entry(coin.denom.clone()).or_default() += coin.amount;
        }
        Ok(())
    }

    fn transfer_to_module_pool(
        &self,
        _ctx: &Context,
        from: &AccAddress,
        pool: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError> {
        self.journal.record(HostCall::TransferToModulePool {
            from: from.clone(),
            pool: pool.to_string(),
            amounts: amounts.clone(),
        });
        self.debit(&mut self.accounts.lock().unwrap(), from.as_str(), amounts)?;
        credit(&mut self.pools.lock(), pool, amounts);
        Ok(())
    }

    fn transfer_between_pools(
        &self,
        _ctx: &Context,
        from_pool: &str,
        to_pool: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError> {
        self.journal.record(HostCall::TransferBetweenPools {
            from_pool: from_pool.to_string(),
            to_pool: to_pool.to_string(),
            amounts: amounts.clone(),
        });
        if let Some(err) = self.fail_pool_transfer.lock().unwrap().clone() {
            return Err(err);
        }
        let mut pools = self.pools.lock();
        self.debit(&mut pools, from_pool, amounts)?;
        credit(&mut pools, to_pool, amounts);
        Ok(())
    }
}

//! Capabilities the host chain supplies to the fee module.
//!
//! The fee module never touches balances directly. It asks the host ledger to
//! move and destroy coins, and hands the validator and community legs to the
//! host's reward and treasury plumbing. Every call happens synchronously inside
//! the host's state transition; if any of them returns an error the host must
//! roll the whole transition back, because the fee module performs no
//! compensation of its own.

use regen_types::{AccAddress, Coin, Coins};
use thiserror::Error;

/// Per-transition information handed in by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    pub chain_id: String,
    pub block_height: u64,
}

impl Context {
    pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            block_height,
        }
    }
}

/// Errors a collaborator may return. They reach the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("insufficient funds in {holder}: need {needed}{denom}, have {available}{denom}")]
    InsufficientFunds {
        holder: String,
        denom: String,
        needed: u128,
        available: u128,
    },

    #[error("{0} is frozen")]
    Frozen(String),

    #[error("unknown module pool {0}")]
    UnknownPool(String),

    #[error("{0}")]
    Other(String),
}

/// Account ledger: moves and destroys balances.
pub trait Ledger {
    /// Permanently remove `amounts` from the module pool `pool`.
    fn burn(&self, ctx: &Context, pool: &str, amounts: &Coins) -> Result<(), CollaboratorError>;

    /// Move `amounts` from a user account into the module pool `pool`.
    fn transfer_to_module_pool(
        &self,
        ctx: &Context,
        from: &AccAddress,
        pool: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError>;

    /// Move `amounts` from one module pool to another.
    fn transfer_between_pools(
        &self,
        ctx: &Context,
        from_pool: &str,
        to_pool: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError>;
}

/// Validator-reward sink.
pub trait ValidatorRewards {
    fn allocate_to_validators(&self, ctx: &Context, amount: &Coin) -> Result<(), CollaboratorError>;
}

/// Community treasury sink.
pub trait Treasury {
    /// `depositor` is `None` when the host accepts funding without a named
    /// depositor.
    fn fund_community_pool(
        &self,
        ctx: &Context,
        amount: &Coin,
        depositor: Option<&AccAddress>,
    ) -> Result<(), CollaboratorError>;
}

impl<T: Ledger + ?Sized> Ledger for &T {
    fn burn(&self, ctx: &Context, pool: &str, amounts: &Coins) -> Result<(), CollaboratorError> {
        (**self).burn(ctx, pool, amounts)
    }

    fn transfer_to_module_pool(
        &self,
        ctx: &Context,
        from: &AccAddress,
        pool: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError> {
        (**self).transfer_to_module_pool(ctx, from, pool, amounts)
    }

    fn transfer_between_pools(
        &self,
        ctx: &Context,
        from_pool: &str,
        to_pool: &str,
        amounts: &Coins,
    ) -> Result<(), CollaboratorError> {
        (**self).transfer_between_pools(ctx, from_pool, to_pool, amounts)
    }
}

impl<T: ValidatorRewards + ?Sized> ValidatorRewards for &T {
    fn allocate_to_validators(&self, ctx: &Context, amount: &Coin) -> Result<(), CollaboratorError> {
        (**self).allocate_to_validators(ctx, amount)
    }
}

impl<T: Treasury + ?Sized> Treasury for &T {
    fn fund_community_pool(
        &self,
        ctx: &Context,
        amount: &Coin,
        depositor: Option<&AccAddress>,
    ) -> Result<(), CollaboratorError> {
        (**self).fund_community_pool(ctx, amount, depositor)
    }
}

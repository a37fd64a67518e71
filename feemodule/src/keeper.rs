//! Fee router and distributor.
//!
//! `route_fee` is the single entry point for registry hooks: it computes the
//! fee on a value-bearing action, pulls it from the payer into the module's
//! holding pool, and hands it to `distribute`. Both run as a straight line of
//! collaborator calls; the first error aborts the rest and is returned as is.
//! Nothing already applied is undone here. The host transition must be rolled
//! back on any error, otherwise a partial distribution stays on the ledger.

use crate::config::FeeModuleConfig;
use crate::error::FeeError;
use crate::expected_keepers::{CollaboratorError, Context, Ledger, Treasury, ValidatorRewards};
use crate::params::Params;
use crate::split::{compute_fee, FeeSplit};
use crate::MODULE_NAME;
use regen_types::{AccAddress, Coin, Coins};
use serde::{Deserialize, Serialize};

/// How the community leg reaches the treasury.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CommunityFunding {
    /// `fund_community_pool` with the module holding account as depositor.
    #[default]
    ModuleDepositor,
    /// `fund_community_pool` without a depositor.
    NoDepositor,
    /// Ledger transfer from the holding pool into a dedicated treasury pool.
    PoolTransfer { pool: String },
}

impl CommunityFunding {
    /// A pool transfer must name a pool other than the holding pool, or the
    /// community leg would never leave it.
    pub fn check(&self, module_name: &str) -> Result<(), FeeError> {
        if let Self::PoolTransfer { pool } = self {
            if pool.is_empty() || pool == module_name {
                return Err(FeeError::Config(format!(
                    "community pool {pool:?} must be a distinct, non-empty pool"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of a routed fee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeReceipt {
    pub payer: AccAddress,
    pub fee: Coin,
    pub split: FeeSplit,
}

/// Stateless fee keeper over the host's collaborators.
pub struct FeeKeeper<L, V, T> {
    ledger: L,
    rewards: V,
    treasury: T,
    module_name: String,
    module_address: AccAddress,
    community_funding: CommunityFunding,
}

impl<L, V, T> FeeKeeper<L, V, T>
where
    L: Ledger,
    V: ValidatorRewards,
    T: Treasury,
{
    pub fn new(ledger: L, rewards: V, treasury: T) -> Self {
        Self {
            ledger,
            rewards,
            treasury,
            module_name: MODULE_NAME.to_string(),
            module_address: AccAddress::for_module(MODULE_NAME),
            community_funding: CommunityFunding::default(),
        }
    }

    pub fn from_config(config: &FeeModuleConfig, ledger: L, rewards: V, treasury: T) -> Self {
        Self::new(ledger, rewards, treasury)
            .with_module_name(&config.module_name)
            .with_community_funding(config.community_funding.clone())
    }

    pub fn with_module_name(mut self, name: &str) -> Self {
        self.module_name = name.to_string();
        self.module_address = AccAddress::for_module(name);
        self
    }

    pub fn with_community_funding(mut self, funding: CommunityFunding) -> Self {
        self.community_funding = funding;
        self
    }

    /// Name of the holding pool fees pass through.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn module_address(&self) -> &AccAddress {
        &self.module_address
    }

    /// Charge the fee on `credit_value` to `payer` and distribute it.
    ///
    /// Returns `Ok(None)` when the fee truncates to zero; no collaborator is
    /// called in that case. Parameter, funding, denom and split errors surface
    /// before collection; a collection failure surfaces before any
    /// distribution.
    pub fn route_fee(
        &self,
        ctx: &Context,
        payer: &AccAddress,
        credit_value: &Coin,
        params: &Params,
    ) -> Result<Option<FeeReceipt>, FeeError> {
        params.validate()?;
        self.community_funding.check(&self.module_name)?;

        let fee_amount = compute_fee(credit_value.amount, params)?;
        tracing::debug!(
            height = ctx.block_height,
            %payer,
            credit = %credit_value,
            fee_rate = %params.fee_rate(),
            fee_amount,
            "computed registry fee"
        );
        if fee_amount == 0 {
            return Ok(None);
        }

        credit_value.validate().map_err(FeeError::InvalidCoin)?;
        let fee = credit_value.with_amount(fee_amount);
        // Fix the split before anything touches the ledger.
        let split = FeeSplit::compute(fee_amount, params)?;

        if let Err(e) = self.ledger.transfer_to_module_pool(
            ctx,
            payer,
            &self.module_name,
            &Coins::from(fee.clone()),
        ) {
            tracing::warn!(%payer, %fee, error = %e, "fee collection failed");
            return Err(e.into());
        }

        self.dispatch(ctx, &fee, &split)?;
        tracing::info!(
            height = ctx.block_height,
            %payer,
            %fee,
            burn = split.burn,
            validators = split.validators,
            community = split.community,
            "registry fee routed"
        );
        Ok(Some(FeeReceipt {
            payer: payer.clone(),
            fee,
            split,
        }))
    }

    /// Split a fee already sitting in the holding pool and dispatch it:
    /// burn first, then validators, then community. Zero legs are skipped.
    ///
    /// All three amounts are fixed before the first call, so a failure part
    /// way through never alters what earlier legs received.
    pub fn distribute(
        &self,
        ctx: &Context,
        fee: &Coin,
        params: &Params,
    ) -> Result<FeeSplit, FeeError> {
        self.community_funding.check(&self.module_name)?;
        let split = FeeSplit::compute(fee.amount, params)?;
        if split.total() > 0 {
            fee.validate().map_err(FeeError::InvalidCoin)?;
            self.dispatch(ctx, fee, &split)?;
        }
        Ok(split)
    }

    fn dispatch(&self, ctx: &Context, fee: &Coin, split: &FeeSplit) -> Result<(), FeeError> {
        tracing::debug!(
            height = ctx.block_height,
            %fee,
            burn = split.burn,
            validators = split.validators,
            community = split.community,
            "distributing fee"
        );

        if split.burn > 0 {
            let coins = Coins::from(fee.with_amount(split.burn));
            if let Err(e) = self.ledger.burn(ctx, &self.module_name, &coins) {
                tracing::warn!(%coins, error = %e, "fee burn failed");
                return Err(e.into());
            }
        }

        if split.validators > 0 {
            let coin = fee.with_amount(split.validators);
            if let Err(e) = self.rewards.allocate_to_validators(ctx, &coin) {
                tracing::warn!(%coin, error = %e, "validator allocation failed");
                return Err(e.into());
            }
        }

        if split.community > 0 {
            let coin = fee.with_amount(split.community);
            if let Err(e) = self.fund_community(ctx, &coin) {
                tracing::warn!(%coin, error = %e, "community funding failed");
                return Err(e.into());
            }
        }

        Ok(())
    }

    fn fund_community(&self, ctx: &Context, coin: &Coin) -> Result<(), CollaboratorError> {
        match &self.community_funding {
            CommunityFunding::ModuleDepositor => {
                self.treasury
                    .fund_community_pool(ctx, coin, Some(&self.module_address))
            }
            CommunityFunding::NoDepositor => self.treasury.fund_community_pool(ctx, coin, None),
            CommunityFunding::PoolTransfer { pool } => self.ledger.transfer_between_pools(
                ctx,
                &self.module_name,
                pool,
                &Coins::from(coin.clone()),
            ),
        }
    }
}

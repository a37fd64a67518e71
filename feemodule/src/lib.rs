//! Registry fee routing for the Regen ledger.
//!
//! When a value-bearing action happens elsewhere on chain (a credit sale, for
//! instance) the registry calls [`FeeKeeper::route_fee`]. The keeper takes
//! `fee_rate` of the transacted value from the payer and splits it three ways:
//!
//! - a burned portion (`burn_share`)
//! - validator rewards (`validator_share`)
//! - the community pool (the remainder, nominally `community_share`)
//!
//! All parameters are governance-controlled and passed in per call. The
//! keeper holds no state of its own; balances live behind the host-supplied
//! [`Ledger`], [`ValidatorRewards`] and [`Treasury`] capabilities.

pub mod config;
pub mod error;
pub mod expected_keepers;
pub mod keeper;
pub mod params;
pub mod split;

pub use config::FeeModuleConfig;
pub use error::FeeError;
pub use expected_keepers::{CollaboratorError, Context, Ledger, Treasury, ValidatorRewards};
pub use keeper::{CommunityFunding, FeeKeeper, FeeReceipt};
pub use params::{apply_update, MsgUpdateParams, Params};
pub use split::{compute_fee, FeeSplit};

/// Default module name; also the holding pool fees pass through.
pub const MODULE_NAME: &str = "feemodule";

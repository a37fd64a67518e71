//! Fee module configuration with TOML file support.

use serde::{Deserialize, Serialize};

use regen_types::AccAddress;
use regen_utils::{try_init_logging, LogFormat, LoggingError};

use crate::keeper::CommunityFunding;
use crate::params::{apply_update, MsgUpdateParams, Params};
use crate::{FeeError, MODULE_NAME};

/// Host-side configuration for the fee module.
///
/// `params` seeds genesis; afterwards the live set only changes through
/// [`apply_update`](crate::params::apply_update).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeeModuleConfig {
    /// Module name, also the name of the holding pool.
    #[serde(default = "default_module_name")]
    pub module_name: String,

    /// Account allowed to submit `MsgUpdateParams`.
    #[serde(default = "default_authority")]
    pub authority: AccAddress,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Delivery of the community leg.
    #[serde(default)]
    pub community_funding: CommunityFunding,

    /// Genesis parameters.
    #[serde(default)]
    pub params: Params,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_module_name() -> String {
    MODULE_NAME.to_string()
}

fn default_authority() -> AccAddress {
    AccAddress::for_module("gov")
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl FeeModuleConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, FeeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FeeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, FeeError> {
        let config: Self = toml::from_str(s).map_err(|e| FeeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, FeeError> {
        toml::to_string_pretty(self).map_err(|e| FeeError::Config(e.to_string()))
    }

    /// Reject an empty module name, an empty treasury pool, or invalid
    /// genesis parameters.
    pub fn validate(&self) -> Result<(), FeeError> {
        if self.module_name.is_empty() {
            return Err(FeeError::Config("module_name must not be empty".into()));
        }
        self.community_funding.check(&self.module_name)?;
        self.params.validate()
    }

    /// Install the global subscriber with the configured format and level.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        try_init_logging(self.log_format, &self.log_level)
    }

    /// Apply a governance update signed by the configured authority.
    pub fn update_params(
        &self,
        current: &Params,
        msg: MsgUpdateParams,
    ) -> Result<Params, FeeError> {
        apply_update(current, msg, &self.authority)
    }
}

impl Default for FeeModuleConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            authority: default_authority(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            community_funding: CommunityFunding::default(),
            params: Params::default(),
        }
    }
}

//! Addresses and parameters of the infrasound burn-info deposit.

use core::{fmt, str::FromStr};

use alloy_primitives::{address, Address};
use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The L1 attributes depositor account (EOA with no known private key).
/// <https://specs.optimism.io/protocol/deposits.html#l1-attributes-depositor-account>
pub const L1_ATTRIBUTES_DEPOSITOR: Address = address!("DeaDDEaDDeAdDeAdDEAdDEaddeAddEAdDEAd0001");

/// The infrasound contract on L2, receiver of `report(uint64,uint64)`.
pub const INFRASOUND_ADDRESS: Address = address!("B565656a18bd287A28C6aBEBBcbBDB54DDe37eeb");

/// Gas limit for the burn-info deposit.
pub const INFRASOUND_TX_GAS: u64 = 150_000_000;

/// What to do when `basefee * gasUsed + blobBaseFee` does not fit in 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnPolicy {
    /// Truncate the base fee to its low 64 bits and compute modulo 2^64.
    #[default]
    Wrapping,
    /// Clamp the burn at `u64::MAX`.
    Saturating,
    /// Refuse to build the deposit.
    Checked,
}

impl BurnPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
            Self::Checked => "checked",
        }
    }
}

impl fmt::Display for BurnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown burn policy {0:?}, expected one of: wrapping, saturating, checked")]
pub struct UnknownBurnPolicy(pub String);

impl FromStr for BurnPolicy {
    type Err = UnknownBurnPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wrapping" => Ok(Self::Wrapping),
            "saturating" => Ok(Self::Saturating),
            "checked" => Ok(Self::Checked),
            _ => Err(UnknownBurnPolicy(s.to_string())),
        }
    }
}

/// Configuration of the deposit builder (defaults are the chain's values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct BuilderConfig {
    #[builder(default = L1_ATTRIBUTES_DEPOSITOR)]
    pub depositor: Address,
    #[builder(default = INFRASOUND_ADDRESS)]
    pub receiver: Address,
    #[builder(default = INFRASOUND_TX_GAS)]
    pub gas_limit: u64,
    #[builder(default)]
    pub burn_policy: BurnPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

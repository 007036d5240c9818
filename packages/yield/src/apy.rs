use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use stablevault_utils::{
    error::ValidationError,
    helpers::{decimal_param_ge_one, decimal_param_le_one},
};
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::error::YieldResult;

/// Boosts are expressed in basis points of APY
pub const BPS_DENOMINATOR: u32 = 10_000;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Smallest units in one whole native token (18 decimals)
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Minimum deposit (0.1 token) that makes a user eligible for a reward NFT
pub const DEFAULT_REWARD_THRESHOLD: u128 = ONE_TOKEN / 10;

#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct YieldParams {
    /// APY paid while TVL is at or below `tvl_threshold`
    pub base_apy: Decimal,
    pub tvl_threshold: Uint128,
    /// Applied to `base_apy` once TVL exceeds `tvl_threshold`
    pub tvl_multiplier: Decimal,
}

impl YieldParams {
    /// 15.2% base, x1.1 above 100 tokens of TVL
    pub fn vault_default() -> Self {
        Self {
            base_apy: Decimal::permille(152),
            tvl_threshold: Uint128::new(100 * ONE_TOKEN),
            tvl_multiplier: Decimal::percent(110),
        }
    }

    /// 12.5% base, x1.2 above 1000 tokens of TVL
    pub fn manager_default() -> Self {
        Self {
            base_apy: Decimal::permille(125),
            tvl_threshold: Uint128::new(1_000 * ONE_TOKEN),
            tvl_multiplier: Decimal::percent(120),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        decimal_param_le_one(self.base_apy, "base_apy")?;
        decimal_param_ge_one(self.tvl_multiplier, "tvl_multiplier")
    }
}

/// APY before any NFT boost for a pool holding `tvl`.
pub fn base_apy(params: &YieldParams, tvl: Uint128) -> YieldResult<Decimal> {
    if tvl > params.tvl_threshold {
        Ok(params.base_apy.checked_mul(params.tvl_multiplier)?)
    } else {
        Ok(params.base_apy)
    }
}

pub fn bps_to_decimal(bps: u32) -> Decimal {
    Decimal::from_ratio(bps, BPS_DENOMINATOR)
}

/// Boosts are additive: a 250 bps boost on 12.5% gives 15%.
pub fn boosted_apy(apy: Decimal, boost_bps: u32) -> YieldResult<Decimal> {
    Ok(apy.checked_add(bps_to_decimal(boost_bps))?)
}

/// Simple (non-compounding) yield earned on `principal` over `seconds`, rounded down.
pub fn projected_yield(principal: Uint128, apy: Decimal, seconds: u64) -> YieldResult<Uint128> {
    let elapsed = Decimal::from_ratio(seconds, SECONDS_PER_YEAR);
    let rate = apy.checked_mul(elapsed)?;
    Ok(principal.checked_mul_floor(rate)?)
}

pub fn is_reward_eligible(deposit: Uint128, threshold: Uint128) -> bool {
    deposit >= threshold
}

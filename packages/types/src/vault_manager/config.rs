use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use stablevault_yield::YieldParams;

#[cw_serde]
pub struct ConfigBase<T> {
    /// Vault receiving every deposit made through the manager
    pub default_vault: T,
    /// Denom of `default_vault`, cached on instantiate and on vault change
    pub denom: String,
    /// Collection queried for user APY boosts
    pub reward_nft: Option<T>,
    pub yield_params: YieldParams,
    /// Balance a user needs to be eligible for a reward NFT
    pub reward_threshold: Uint128,
}

pub type Config = ConfigBase<Addr>;
pub type ConfigResponse = ConfigBase<String>;

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        Self {
            default_vault: config.default_vault.into(),
            denom: config.denom,
            reward_nft: config.reward_nft.map(Into::into),
            yield_params: config.yield_params,
            reward_threshold: config.reward_threshold,
        }
    }
}

/// Used when you want to update fields on Instantiate config
#[cw_serde]
#[derive(Default)]
pub struct ConfigUpdates {
    /// Only allowed while the manager holds no deposits
    pub default_vault: Option<String>,
    pub reward_nft: Option<String>,
    pub yield_params: Option<YieldParams>,
    pub reward_threshold: Option<Uint128>,
}

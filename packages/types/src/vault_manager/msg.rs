use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Uint128};
use mars_owner::OwnerUpdate;
use stablevault_yield::YieldParams;

use super::ConfigUpdates;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to curate vaults and update config. Defaults to the sender.
    pub owner: Option<String>,
    /// Vault that custodies deposits made through the manager. It is not registered
    /// automatically, use `AddVault` for that.
    pub default_vault: String,
    pub reward_nft: Option<String>,
    /// Defaults to `YieldParams::manager_default()`
    pub yield_params: Option<YieldParams>,
    /// Defaults to 0.1 native token
    pub reward_threshold: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateOwner(OwnerUpdate),

    UpdateConfig {
        updates: ConfigUpdates,
    },

    /// Add a vault to the registry (owner only)
    AddVault {
        address: String,
    },

    /// Remove a vault from the registry (owner only)
    RemoveVault {
        address: String,
    },

    /// Credit the sender with the attached coin and forward it to the default vault
    Deposit {},

    /// Debit the sender and have the default vault pay out `amount` to them
    Withdraw {
        amount: Uint128,
    },

    /// Complete a vault ownership transfer proposed to this manager (owner only).
    /// The manager has to own the default vault to serve withdrawals.
    AcceptVaultOwnership {
        vault: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(super::ConfigResponse)]
    Config {},

    #[returns(bool)]
    IsVault {
        address: String,
    },

    #[returns(cw_paginate::PaginationResponse<String>)]
    Vaults {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Sum of every user balance held through the manager
    #[returns(Uint128)]
    TotalBalance {},

    #[returns(Uint128)]
    UserBalance {
        user: String,
    },

    #[returns(cw_paginate::PaginationResponse<UserBalanceResponse>)]
    AllUserBalances {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(UserPositionResponse)]
    UserPosition {
        user: String,
    },

    /// APY on the manager TVL, before NFT boosts
    #[returns(Decimal)]
    GlobalApy {},
}

#[cw_serde]
pub struct UserBalanceResponse {
    pub user: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct UserPositionResponse {
    pub user: String,
    pub balance: Uint128,
    /// Sum of the user's reward NFT boosts, 0 if no collection is configured
    pub boost_bps: u32,
    pub base_apy: Decimal,
    pub boosted_apy: Decimal,
    pub reward_eligible: bool,
}

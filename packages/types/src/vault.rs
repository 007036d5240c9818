use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Uint128};
use mars_owner::OwnerUpdate;
use stablevault_yield::YieldParams;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to withdraw. Defaults to the instantiating sender.
    pub owner: Option<String>,
    /// Native denom accepted by `Deposit`
    pub denom: String,
    /// Defaults to `YieldParams::vault_default()`
    pub yield_params: Option<YieldParams>,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateOwner(OwnerUpdate),

    /// Only the owner can change the advertised yield
    UpdateYieldParams(YieldParams),

    /// Deposit exactly one coin of the vault denom
    Deposit {},

    /// Owner only. Sends `amount` of the vault denom to `recipient` (defaults to sender).
    Withdraw {
        amount: Uint128,
        recipient: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(ConfigResponse)]
    Config {},

    /// Sum of all deposits minus all withdrawals
    #[returns(Uint128)]
    TotalBalance {},

    /// Current APY for the tracked balance, before NFT boosts
    #[returns(Decimal)]
    Apy {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Option<String>,
    pub denom: String,
    pub yield_params: YieldParams,
}

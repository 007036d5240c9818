use cosmwasm_std::{Decimal, Deps, Uint128};
use cw_paginate::{paginate_map_query, PaginationResponse, DEFAULT_LIMIT, MAX_LIMIT};
use cw_storage_plus::Bound;
use stablevault_types::{
    adapters::reward_nft::RewardNft,
    vault_manager::{ConfigResponse, UserBalanceResponse, UserPositionResponse},
};
use stablevault_yield::{base_apy, boosted_apy, is_reward_eligible};

use crate::{
    error::ContractResult,
    state::{CONFIG, TOTAL_BALANCE, USER_BALANCES, VAULTS},
};

pub fn query_config(deps: Deps) -> ContractResult<ConfigResponse> {
    Ok(CONFIG.load(deps.storage)?.into())
}

pub fn query_is_vault(deps: Deps, address: String) -> ContractResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(VAULTS.has(deps.storage, &addr))
}

pub fn query_vaults(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> ContractResult<PaginationResponse<String>> {
    let start = start_after.map(|addr| Bound::ExclusiveRaw(addr.into_bytes()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    paginate_map_query(&VAULTS, deps.storage, start, Some(limit), |vault_addr, _| {
        Ok(vault_addr.to_string())
    })
}

pub fn query_user_balance(deps: Deps, user: String) -> ContractResult<Uint128> {
    let user_addr = deps.api.addr_validate(&user)?;
    Ok(USER_BALANCES.may_load(deps.storage, &user_addr)?.unwrap_or_default())
}

pub fn query_all_user_balances(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> ContractResult<PaginationResponse<UserBalanceResponse>> {
    let start = start_after.map(|addr| Bound::ExclusiveRaw(addr.into_bytes()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    paginate_map_query(&USER_BALANCES, deps.storage, start, Some(limit), |user, balance| {
        Ok(UserBalanceResponse {
            user: user.to_string(),
            balance,
        })
    })
}

pub fn query_global_apy(deps: Deps) -> ContractResult<Decimal> {
    let config = CONFIG.load(deps.storage)?;
    let total = TOTAL_BALANCE.load(deps.storage)?;
    Ok(base_apy(&config.yield_params, total)?)
}

pub fn query_user_position(deps: Deps, user: String) -> ContractResult<UserPositionResponse> {
    let user_addr = deps.api.addr_validate(&user)?;
    let config = CONFIG.load(deps.storage)?;
    let balance = USER_BALANCES.may_load(deps.storage, &user_addr)?.unwrap_or_default();

    let boost_bps = match config.reward_nft {
        Some(addr) => RewardNft::new(addr).query_user_boost(&deps.querier, &user_addr)?,
        None => 0,
    };

    let total = TOTAL_BALANCE.load(deps.storage)?;
    let base = base_apy(&config.yield_params, total)?;

    Ok(UserPositionResponse {
        user,
        balance,
        boost_bps,
        base_apy: base,
        boosted_apy: boosted_apy(base, boost_bps)?,
        reward_eligible: is_reward_eligible(balance, config.reward_threshold),
    })
}

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use stablevault_types::vault_manager::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::{
    error::ContractResult,
    execute::{accept_vault_ownership, add_vault, deposit, remove_vault, update_config, withdraw},
    instantiate::init,
    query::{
        query_all_user_balances, query_config, query_global_apy, query_is_vault,
        query_user_balance, query_user_position, query_vaults,
    },
    state::{OWNER, TOTAL_BALANCE},
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;
    init(deps, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::UpdateOwner(update) => Ok(OWNER.update(deps, info, update)?),
        ExecuteMsg::UpdateConfig {
            updates,
        } => update_config(deps, info, updates),
        ExecuteMsg::AddVault {
            address,
        } => add_vault(deps, info, address),
        ExecuteMsg::RemoveVault {
            address,
        } => remove_vault(deps, info, address),
        ExecuteMsg::Deposit {} => deposit(deps, info),
        ExecuteMsg::Withdraw {
            amount,
        } => withdraw(deps, info, amount),
        ExecuteMsg::AcceptVaultOwnership {
            vault,
        } => accept_vault_ownership(deps, info, vault),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsVault {
            address,
        } => to_json_binary(&query_is_vault(deps, address)?),
        QueryMsg::Vaults {
            start_after,
            limit,
        } => to_json_binary(&query_vaults(deps, start_after, limit)?),
        QueryMsg::TotalBalance {} => to_json_binary(&TOTAL_BALANCE.load(deps.storage)?),
        QueryMsg::UserBalance {
            user,
        } => to_json_binary(&query_user_balance(deps, user)?),
        QueryMsg::AllUserBalances {
            start_after,
            limit,
        } => to_json_binary(&query_all_user_balances(deps, start_after, limit)?),
        QueryMsg::UserPosition {
            user,
        } => to_json_binary(&query_user_position(deps, user)?),
        QueryMsg::GlobalApy {} => to_json_binary(&query_global_apy(deps)?),
    };
    res.map_err(Into::into)
}

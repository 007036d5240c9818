#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use stablevault_types::vault::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::{
    error::ContractResult,
    execute::{deposit, update_yield_params, withdraw},
    instantiate::init,
    query::{query_apy, query_config},
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
        ExecuteMsg::UpdateYieldParams(params) => update_yield_params(deps, info, params),
        ExecuteMsg::Deposit {} => deposit(deps, info),
        ExecuteMsg::Withdraw {
            amount,
            recipient,
        } => withdraw(deps, info, amount, recipient),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TotalBalance {} => to_json_binary(&TOTAL_BALANCE.load(deps.storage)?),
        QueryMsg::Apy {} => to_json_binary(&query_apy(deps)?),
    };
    res.map_err(Into::into)
}

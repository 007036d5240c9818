#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use cw20::{Cw20Coin, MinterResponse};
use cw20_base::msg::InstantiateMsg as BaseInstantiateMsg;
use stablevault_types::stablecoin::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::error::ContractResult;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The sender receives the whole initial supply and becomes the minter.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    let initial_supply = msg.initial_supply()?;
    let deployer = info.sender.to_string();

    let base_msg = BaseInstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: vec![Cw20Coin {
            address: deployer.clone(),
            amount: initial_supply,
        }],
        mint: Some(MinterResponse {
            minter: deployer.clone(),
            cap: msg.cap,
        }),
        marketing: None,
    };
    let res = cw20_base::contract::instantiate(deps.branch(), env, info, base_msg)?;

    // recorded after the base contract, which writes its own version
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    Ok(res
        .add_attribute("action", "instantiate")
        .add_attribute("owner", deployer)
        .add_attribute("initial_supply", initial_supply))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    cw20_base::contract::execute(deps, env, info, msg).map_err(Into::into)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    cw20_base::contract::query(deps, env, msg)
}

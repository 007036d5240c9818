#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw721_base::{Cw721Contract, InstantiateMsg as ParentInstantiateMsg};
use stablevault_types::reward_nft::{ExecuteMsg, InstantiateMsg, NftConfig, NftTier, QueryMsg};

use crate::{
    error::ContractError,
    execute::{burn, mint, mint_tier, update_config},
    query::{query_balance_of, query_config, query_next_id, query_token_tier, query_user_boost},
    state::{CONFIG, NEXT_ID},
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Extending CW721 base contract
pub type Parent<'a> = Cw721Contract<'a, Empty, Empty, Empty, Empty>;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    NEXT_ID.save(deps.storage, &1)?;
    CONFIG.save(
        deps.storage,
        &NftConfig {
            base_token_uri: msg.base_token_uri,
        },
    )?;

    Parent::default().instantiate(
        deps.branch(),
        env,
        info,
        ParentInstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: msg.minter,
        },
    )
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintGenesis {
            recipient,
        } => mint_tier(deps, info, &recipient, NftTier::Genesis),
        ExecuteMsg::MintMultiplier {
            recipient,
        } => mint_tier(deps, info, &recipient, NftTier::Multiplier),
        ExecuteMsg::MintAccess {
            recipient,
        } => mint_tier(deps, info, &recipient, NftTier::Access),
        ExecuteMsg::Mint {
            recipient,
            token_uri,
        } => mint(deps, info, &recipient, token_uri),
        ExecuteMsg::Burn {
            token_id,
        } => burn(deps, env, info, token_id),
        ExecuteMsg::UpdateConfig {
            updates,
        } => update_config(deps, info, updates),
        _ => Parent::default().execute(deps, env, info, msg.try_into()?).map_err(Into::into),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::UserBoost {
            user,
        } => to_json_binary(&query_user_boost(deps, user)?),
        QueryMsg::BalanceOf {
            owner,
        } => to_json_binary(&query_balance_of(deps, owner)?),
        QueryMsg::TokenTier {
            token_id,
        } => to_json_binary(&query_token_tier(deps, token_id)?),
        QueryMsg::NextId {} => to_json_binary(&query_next_id(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        _ => Parent::default().query(deps, env, msg.try_into()?),
    }
}

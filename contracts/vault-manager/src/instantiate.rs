use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use mars_owner::OwnerInit;
use stablevault_types::{
    adapters::{reward_nft::RewardNftUnchecked, vault::VaultUnchecked},
    vault_manager::{Config, InstantiateMsg},
};
use stablevault_yield::{YieldParams, DEFAULT_REWARD_THRESHOLD};

use crate::{
    error::ContractResult,
    state::{CONFIG, OWNER, TOTAL_BALANCE},
};

pub fn init(deps: DepsMut, info: MessageInfo, msg: InstantiateMsg) -> ContractResult<Response> {
    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    OWNER.initialize(
        deps.storage,
        deps.api,
        OwnerInit::SetInitialOwner {
            owner: owner.clone(),
        },
    )?;

    let vault = VaultUnchecked::new(msg.default_vault).check(deps.api)?;
    let denom = vault.query_config(&deps.querier)?.denom;

    let reward_nft = msg
        .reward_nft
        .map(|addr| RewardNftUnchecked::new(addr).check(deps.api))
        .transpose()?
        .map(|nft| nft.address().clone());

    let yield_params = msg.yield_params.unwrap_or_else(YieldParams::manager_default);
    yield_params.validate()?;

    let config = Config {
        default_vault: vault.address().clone(),
        denom,
        reward_nft,
        yield_params,
        reward_threshold: msg
            .reward_threshold
            .unwrap_or_else(|| Uint128::new(DEFAULT_REWARD_THRESHOLD)),
    };
    CONFIG.save(deps.storage, &config)?;

    TOTAL_BALANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("default_vault", config.default_vault)
        .add_attribute("denom", config.denom))
}

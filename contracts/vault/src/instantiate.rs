use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use mars_owner::OwnerInit;
use stablevault_types::vault::InstantiateMsg;
use stablevault_utils::helpers::validate_native_denom;
use stablevault_yield::YieldParams;

use crate::{
    error::ContractResult,
    state::{DENOM, OWNER, TOTAL_BALANCE, YIELD_PARAMS},
};

pub fn init(deps: DepsMut, info: MessageInfo, msg: InstantiateMsg) -> ContractResult<Response> {
    // the deployer owns the vault unless told otherwise
    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    OWNER.initialize(
        deps.storage,
        deps.api,
        OwnerInit::SetInitialOwner {
            owner: owner.clone(),
        },
    )?;

    validate_native_denom(&msg.denom)?;
    DENOM.save(deps.storage, &msg.denom)?;

    let yield_params = msg.yield_params.unwrap_or_else(YieldParams::vault_default);
    yield_params.validate()?;
    YIELD_PARAMS.save(deps.storage, &yield_params)?;

    TOTAL_BALANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("denom", msg.denom))
}

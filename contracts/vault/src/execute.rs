use cosmwasm_std::{coins, BankMsg, DepsMut, MessageInfo, Response, Uint128};
use stablevault_utils::helpers::option_string_to_addr;
use stablevault_yield::YieldParams;

use crate::{
    error::{ContractError, ContractResult},
    state::{DENOM, OWNER, TOTAL_BALANCE, YIELD_PARAMS},
};

pub fn deposit(deps: DepsMut, info: MessageInfo) -> ContractResult<Response> {
    let denom = DENOM.load(deps.storage)?;
    let amount = cw_utils::must_pay(&info, &denom)?;

    let total = TOTAL_BALANCE.load(deps.storage)?.checked_add(amount)?;
    TOTAL_BALANCE.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("total_balance", total))
}

pub fn withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
    recipient: Option<String>,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdraw amount must be greater than 0".to_string(),
        });
    }

    let available = TOTAL_BALANCE.load(deps.storage)?;
    if amount > available {
        return Err(ContractError::InsufficientBalance {
            available,
            requested: amount,
        });
    }
    let total = available - amount;
    TOTAL_BALANCE.save(deps.storage, &total)?;

    let recipient = option_string_to_addr(deps.api, recipient, info.sender.clone())?;
    let denom = DENOM.load(deps.storage)?;
    let transfer_msg = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: coins(amount.u128(), denom),
    };

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("total_balance", total))
}

pub fn update_yield_params(
    deps: DepsMut,
    info: MessageInfo,
    params: YieldParams,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    params.validate()?;
    YIELD_PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "update_yield_params")
        .add_attribute("base_apy", params.base_apy.to_string())
        .add_attribute("tvl_threshold", params.tvl_threshold)
        .add_attribute("tvl_multiplier", params.tvl_multiplier.to_string()))
}

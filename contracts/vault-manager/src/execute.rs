use cosmwasm_std::{coin, DepsMut, Empty, MessageInfo, Response, Uint128};
use stablevault_types::{
    adapters::{
        reward_nft::RewardNftUnchecked,
        vault::{Vault, VaultUnchecked},
    },
    vault_manager::ConfigUpdates,
};
use stablevault_yield::is_reward_eligible;

use crate::{
    error::{ContractError, ContractResult},
    state::{CONFIG, OWNER, TOTAL_BALANCE, USER_BALANCES, VAULTS},
};

pub fn add_vault(deps: DepsMut, info: MessageInfo, address: String) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let vault_addr = deps.api.addr_validate(&address)?;
    if VAULTS.has(deps.storage, &vault_addr) {
        return Err(ContractError::VaultAlreadyRegistered {
            address,
        });
    }
    VAULTS.save(deps.storage, &vault_addr, &Empty {})?;

    Ok(Response::new().add_attribute("action", "add_vault").add_attribute("vault", vault_addr))
}

pub fn remove_vault(deps: DepsMut, info: MessageInfo, address: String) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let vault_addr = deps.api.addr_validate(&address)?;
    if !VAULTS.has(deps.storage, &vault_addr) {
        return Err(ContractError::VaultNotRegistered {
            address,
        });
    }
    if CONFIG.load(deps.storage)?.default_vault == vault_addr {
        return Err(ContractError::DefaultVaultRemoval {
            address,
        });
    }
    VAULTS.remove(deps.storage, &vault_addr);

    Ok(Response::new().add_attribute("action", "remove_vault").add_attribute("vault", vault_addr))
}

pub fn deposit(deps: DepsMut, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let amount = cw_utils::must_pay(&info, &config.denom)?;

    let balance = USER_BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        .checked_add(amount)?;
    USER_BALANCES.save(deps.storage, &info.sender, &balance)?;

    let total = TOTAL_BALANCE.load(deps.storage)?.checked_add(amount)?;
    TOTAL_BALANCE.save(deps.storage, &total)?;

    let vault = Vault::new(config.default_vault);
    let deposit_msg = vault.deposit_msg(coin(amount.u128(), config.denom))?;

    Ok(Response::new()
        .add_message(deposit_msg)
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("vault", vault.address())
        .add_attribute("amount", amount)
        .add_attribute("user_balance", balance)
        .add_attribute(
            "reward_eligible",
            is_reward_eligible(balance, config.reward_threshold).to_string(),
        ))
}

pub fn withdraw(deps: DepsMut, info: MessageInfo, amount: Uint128) -> ContractResult<Response> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdraw amount must be greater than 0".to_string(),
        });
    }

    let available = USER_BALANCES.may_load(deps.storage, &info.sender)?.unwrap_or_default();
    if amount > available {
        return Err(ContractError::InsufficientBalance {
            available,
            requested: amount,
        });
    }

    let balance = available - amount;
    if balance.is_zero() {
        USER_BALANCES.remove(deps.storage, &info.sender);
    } else {
        USER_BALANCES.save(deps.storage, &info.sender, &balance)?;
    }

    let total = TOTAL_BALANCE.load(deps.storage)?.checked_sub(amount)?;
    TOTAL_BALANCE.save(deps.storage, &total)?;

    let config = CONFIG.load(deps.storage)?;
    let vault = Vault::new(config.default_vault);
    let withdraw_msg = vault.withdraw_msg(amount, &info.sender)?;

    Ok(Response::new()
        .add_message(withdraw_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("sender", info.sender)
        .add_attribute("vault", vault.address())
        .add_attribute("amount", amount)
        .add_attribute("user_balance", balance))
}

/// The vault owner has to propose the manager first, see `OwnerUpdate::ProposeNewOwner`.
pub fn accept_vault_ownership(
    deps: DepsMut,
    info: MessageInfo,
    vault: String,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let vault = VaultUnchecked::new(vault).check(deps.api)?;

    Ok(Response::new()
        .add_message(vault.accept_ownership_msg()?)
        .add_attribute("action", "accept_vault_ownership")
        .add_attribute("vault", vault.address()))
}

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    updates: ConfigUpdates,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    let mut response = Response::new().add_attribute("action", "update_config");

    if let Some(default_vault) = updates.default_vault {
        let total_balance = TOTAL_BALANCE.load(deps.storage)?;
        if !total_balance.is_zero() {
            return Err(ContractError::DefaultVaultInUse {
                total_balance,
            });
        }

        let vault = VaultUnchecked::new(default_vault).check(deps.api)?;
        config.denom = vault.query_config(&deps.querier)?.denom;
        config.default_vault = vault.address().clone();
        response = response
            .add_attribute("key", "default_vault")
            .add_attribute("value", vault.address())
            .add_attribute("key", "denom")
            .add_attribute("value", config.denom.clone());
    }

    if let Some(reward_nft) = updates.reward_nft {
        let nft = RewardNftUnchecked::new(reward_nft).check(deps.api)?;
        config.reward_nft = Some(nft.address().clone());
        response =
            response.add_attribute("key", "reward_nft").add_attribute("value", nft.address());
    }

    if let Some(yield_params) = updates.yield_params {
        yield_params.validate()?;
        response = response
            .add_attribute("key", "yield_params")
            .add_attribute("value", format!("{yield_params:?}"));
        config.yield_params = yield_params;
    }

    if let Some(threshold) = updates.reward_threshold {
        config.reward_threshold = threshold;
        response = response
            .add_attribute("key", "reward_threshold")
            .add_attribute("value", threshold.to_string());
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(response)
}

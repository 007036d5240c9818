use cosmwasm_std::{DepsMut, Empty, Env, MessageInfo, Response};
use cw721::Cw721Execute;
use cw721_base::{
    ContractError::Ownership,
    OwnershipError::{NoOwner, NotOwner},
};
use stablevault_types::reward_nft::{NftConfigUpdates, NftTier};

use crate::{
    contract::Parent,
    error::ContractError::{self, BaseError},
    state::{CONFIG, NEXT_ID, TOKEN_TIERS},
};

fn next_token_id(deps: &mut DepsMut) -> Result<String, ContractError> {
    let next_id = NEXT_ID.load(deps.storage)?;
    NEXT_ID.save(deps.storage, &(next_id + 1))?;
    Ok(next_id.to_string())
}

/// Mints a token of `tier` to `recipient`. The token URI is derived from the configured base URI.
pub fn mint_tier(
    mut deps: DepsMut,
    info: MessageInfo,
    recipient: &str,
    tier: NftTier,
) -> Result<Response, ContractError> {
    let token_id = next_token_id(&mut deps)?;
    let token_uri = CONFIG.load(deps.storage)?.token_uri(&token_id);

    let res = Parent::default().mint(
        deps.branch(),
        info,
        token_id.clone(),
        recipient.to_string(),
        token_uri,
        Empty {},
    )?;
    TOKEN_TIERS.save(deps.storage, &token_id, &tier)?;

    Ok(res
        .add_attribute("tier", tier.to_string())
        .add_attribute("rarity", tier.rarity())
        .add_attribute("boost_bps", tier.boost_bps().to_string()))
}

pub fn mint(
    mut deps: DepsMut,
    info: MessageInfo,
    recipient: &str,
    token_uri: Option<String>,
) -> Result<Response, ContractError> {
    let token_id = next_token_id(&mut deps)?;
    Parent::default()
        .mint(deps, info, token_id, recipient.to_string(), token_uri, Empty {})
        .map_err(Into::into)
}

/// Burning forgets the token tier, so the holder loses its boost.
pub fn burn(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let res = Parent::default().burn(deps.branch(), env, info, token_id.clone())?;
    TOKEN_TIERS.remove(deps.storage, &token_id);
    Ok(res)
}

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    updates: NftConfigUpdates,
) -> Result<Response, ContractError> {
    let current_minter =
        Parent::default().minter(deps.as_ref())?.minter.ok_or(BaseError(Ownership(NoOwner)))?;

    if info.sender != current_minter {
        return Err(BaseError(Ownership(NotOwner)));
    }

    let mut response = Response::new().add_attribute("action", "update_config");
    let mut config = CONFIG.load(deps.storage)?;

    if let Some(base_token_uri) = updates.base_token_uri {
        response = response
            .add_attribute("key", "base_token_uri")
            .add_attribute("value", base_token_uri.clone());
        config.base_token_uri = Some(base_token_uri);
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(response)
}

use cosmwasm_std::{Addr, Deps, Order, StdResult};
use stablevault_types::reward_nft::{NftConfig, NftTier};

use crate::{
    contract::Parent,
    state::{CONFIG, NEXT_ID, TOKEN_TIERS},
};

fn owned_token_ids<'a>(
    deps: Deps<'a>,
    owner: &Addr,
) -> Box<dyn Iterator<Item = StdResult<String>> + 'a> {
    Parent::default().tokens.idx.owner.prefix(owner.clone()).keys(
        deps.storage,
        None,
        None,
        Order::Ascending,
    )
}

/// Walks every token the user holds, so query gas grows with the size of the holding.
pub fn query_user_boost(deps: Deps, user: String) -> StdResult<u32> {
    let user = deps.api.addr_validate(&user)?;
    owned_token_ids(deps, &user).try_fold(0u32, |total, token_id| {
        let boost = TOKEN_TIERS.may_load(deps.storage, &token_id?)?.map_or(0, |t| t.boost_bps());
        Ok(total.saturating_add(boost))
    })
}

pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<u64> {
    let owner = deps.api.addr_validate(&owner)?;
    owned_token_ids(deps, &owner).try_fold(0u64, |count, token_id| token_id.map(|_| count + 1))
}

pub fn query_token_tier(deps: Deps, token_id: String) -> StdResult<Option<NftTier>> {
    TOKEN_TIERS.may_load(deps.storage, &token_id)
}

pub fn query_next_id(deps: Deps) -> StdResult<String> {
    Ok(NEXT_ID.load(deps.storage)?.to_string())
}

pub fn query_config(deps: Deps) -> StdResult<NftConfig> {
    CONFIG.load(deps.storage)
}

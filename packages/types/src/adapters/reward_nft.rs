use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, QuerierWrapper, StdResult};

use crate::reward_nft::QueryMsg;

#[cw_serde]
pub struct RewardNftBase<T>(T);

impl<T> RewardNftBase<T> {
    pub fn new(address: T) -> RewardNftBase<T> {
        RewardNftBase(address)
    }

    pub fn address(&self) -> &T {
        &self.0
    }
}

pub type RewardNftUnchecked = RewardNftBase<String>;
pub type RewardNft = RewardNftBase<Addr>;

impl From<RewardNft> for RewardNftUnchecked {
    fn from(reward_nft: RewardNft) -> Self {
        Self(reward_nft.0.to_string())
    }
}

impl RewardNftUnchecked {
    pub fn check(&self, api: &dyn Api) -> StdResult<RewardNft> {
        Ok(RewardNftBase(api.addr_validate(self.address())?))
    }
}

impl RewardNft {
    /// Total boost of the user's tokens, in basis points
    pub fn query_user_boost(&self, querier: &QuerierWrapper, user: &Addr) -> StdResult<u32> {
        querier.query_wasm_smart(
            self.address().to_string(),
            &QueryMsg::UserBoost {
                user: user.to_string(),
            },
        )
    }
}

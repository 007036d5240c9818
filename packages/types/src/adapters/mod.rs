pub mod reward_nft;
pub mod vault;

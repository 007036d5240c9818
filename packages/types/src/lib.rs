pub mod adapters;
pub mod reward_nft;
pub mod stablecoin;
pub mod vault;
pub mod vault_manager;

use cw_storage_plus::{Item, Map};
use stablevault_types::reward_nft::{NftConfig, NftTier};

pub const NEXT_ID: Item<u64> = Item::new("next_id");
pub const CONFIG: Item<NftConfig> = Item::new("config");

/// Tier of every minted tier token. Untiered tokens have no entry.
pub const TOKEN_TIERS: Map<&str, NftTier> = Map::new("token_tiers");

use cosmwasm_schema::cw_serde;
use strum::{Display, EnumIter};

/// Reward tiers and the APY boost (in basis points) each token grants its holder
#[cw_serde]
#[derive(Copy, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum NftTier {
    Genesis,
    Multiplier,
    Access,
}

impl NftTier {
    pub fn boost_bps(&self) -> u32 {
        match self {
            NftTier::Genesis => 250,
            NftTier::Multiplier => 180,
            NftTier::Access => 120,
        }
    }

    pub fn rarity(&self) -> &'static str {
        match self {
            NftTier::Genesis => "legendary",
            NftTier::Multiplier => "epic",
            NftTier::Access => "rare",
        }
    }
}

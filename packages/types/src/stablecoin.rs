use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Uint128};
pub use cw20_base::msg::{ExecuteMsg, QueryMsg};

/// Whole tokens credited to the deployer when no initial supply is given
pub const DEFAULT_INITIAL_SUPPLY: u128 = 1_000_000;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Credited to the instantiating sender, who also becomes the minter.
    /// Defaults to `DEFAULT_INITIAL_SUPPLY` whole tokens.
    pub initial_supply: Option<Uint128>,
    /// Upper bound on the total supply reachable through `Mint`
    pub cap: Option<Uint128>,
}

impl InstantiateMsg {
    pub fn initial_supply(&self) -> StdResult<Uint128> {
        match self.initial_supply {
            Some(supply) => Ok(supply),
            None => {
                let unit = Uint128::new(10).checked_pow(self.decimals.into())?;
                Ok(Uint128::new(DEFAULT_INITIAL_SUPPLY).checked_mul(unit)?)
            }
        }
    }
}

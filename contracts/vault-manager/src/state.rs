use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use stablevault_types::vault_manager::Config;

pub const OWNER: Owner = Owner::new("owner");
pub const CONFIG: Item<Config> = Item::new("config");

/// Registered vaults
pub const VAULTS: Map<&Addr, Empty> = Map::new("vaults");

pub const USER_BALANCES: Map<&Addr, Uint128> = Map::new("user_balances");

/// Always equal to the sum of `USER_BALANCES`
pub const TOTAL_BALANCE: Item<Uint128> = Item::new("total_balance");

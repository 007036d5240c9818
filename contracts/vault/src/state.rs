use cosmwasm_std::Uint128;
use cw_storage_plus::Item;
use mars_owner::Owner;
use stablevault_yield::YieldParams;

pub const OWNER: Owner = Owner::new("owner");

/// The only denom accepted by `Deposit`
pub const DENOM: Item<String> = Item::new("denom");

/// Deposits minus withdrawals. Coins sent to the contract outside of `Deposit` are not counted.
pub const TOTAL_BALANCE: Item<Uint128> = Item::new("total_balance");

pub const YIELD_PARAMS: Item<YieldParams> = Item::new("yield_params");

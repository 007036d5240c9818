use cosmwasm_std::{Decimal, Deps};
use stablevault_types::vault::ConfigResponse;
use stablevault_yield::base_apy;

use crate::{
    error::ContractResult,
    state::{DENOM, OWNER, TOTAL_BALANCE, YIELD_PARAMS},
};

pub fn query_config(deps: Deps) -> ContractResult<ConfigResponse> {
    Ok(ConfigResponse {
        owner: OWNER.query(deps.storage)?.owner,
        denom: DENOM.load(deps.storage)?,
        yield_params: YIELD_PARAMS.load(deps.storage)?,
    })
}

pub fn query_apy(deps: Deps) -> ContractResult<Decimal> {
    let params = YIELD_PARAMS.load(deps.storage)?;
    let total = TOTAL_BALANCE.load(deps.storage)?;
    Ok(base_apy(&params, total)?)
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

use crate::{base_apy, boosted_apy, projected_yield, YieldParams};

#[cw_serde]
#[derive(Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ApyInputs {
    pub params: YieldParams,
    pub tvl: Uint128,
    pub boost_bps: u32,
}

#[cw_serde]
#[derive(Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ApyOutputs {
    pub base_apy: Decimal,
    pub boosted_apy: Decimal,
}

#[cw_serde]
#[derive(Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ProjectionInputs {
    pub principal: Uint128,
    pub apy: Decimal,
    pub seconds: u64,
}

#[wasm_bindgen]
pub fn apy_js(inputs: ApyInputs) -> ApyOutputs {
    let base = base_apy(&inputs.params, inputs.tvl).unwrap();
    ApyOutputs {
        base_apy: base,
        boosted_apy: boosted_apy(base, inputs.boost_bps).unwrap(),
    }
}

#[wasm_bindgen]
pub fn projected_yield_js(inputs: ProjectionInputs) -> String {
    projected_yield(inputs.principal, inputs.apy, inputs.seconds).unwrap().to_string()
}

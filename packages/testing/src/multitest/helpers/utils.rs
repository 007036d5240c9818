use cosmwasm_std::Event;
use cw_multi_test::AppResponse;

pub const DENOM: &str = "ueth";

/// Value of the first wasm attribute named `key` emitted by the execution
pub fn get_wasm_attribute(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|event: &&Event| event.ty == "wasm")
        .flat_map(|event| &event.attributes)
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}

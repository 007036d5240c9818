use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn mock_nft_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stablevault_reward_nft::contract::execute,
        stablevault_reward_nft::contract::instantiate,
        stablevault_reward_nft::contract::query,
    );
    Box::new(contract)
}

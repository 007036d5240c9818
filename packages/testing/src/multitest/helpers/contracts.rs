use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn mock_stablecoin_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stablevault_stablecoin::contract::execute,
        stablevault_stablecoin::contract::instantiate,
        stablevault_stablecoin::contract::query,
    );
    Box::new(contract)
}

pub fn mock_vault_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stablevault_vault::contract::execute,
        stablevault_vault::contract::instantiate,
        stablevault_vault::contract::query,
    );
    Box::new(contract)
}

pub fn mock_vault_manager_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stablevault_vault_manager::contract::execute,
        stablevault_vault_manager::contract::instantiate,
        stablevault_vault_manager::contract::query,
    );
    Box::new(contract)
}

pub fn mock_reward_nft_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stablevault_reward_nft::contract::execute,
        stablevault_reward_nft::contract::instantiate,
        stablevault_reward_nft::contract::query,
    );
    Box::new(contract)
}

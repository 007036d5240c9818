use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn mock_vault_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stablevault_vault::contract::execute,
        stablevault_vault::contract::instantiate,
        stablevault_vault::contract::query,
    );
    Box::new(contract)
}

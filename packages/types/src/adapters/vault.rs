use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use mars_owner::OwnerUpdate;

use crate::vault::{ConfigResponse, ExecuteMsg, QueryMsg};

#[cw_serde]
pub struct VaultBase<T>(T);

impl<T> VaultBase<T> {
    pub fn new(address: T) -> VaultBase<T> {
        VaultBase(address)
    }

    pub fn address(&self) -> &T {
        &self.0
    }
}

pub type VaultUnchecked = VaultBase<String>;
pub type Vault = VaultBase<Addr>;

impl From<Vault> for VaultUnchecked {
    fn from(vault: Vault) -> Self {
        Self(vault.0.to_string())
    }
}

impl VaultUnchecked {
    pub fn check(&self, api: &dyn Api) -> StdResult<Vault> {
        Ok(VaultBase(api.addr_validate(self.address())?))
    }
}

impl Vault {
    pub fn deposit_msg(&self, coin: Coin) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.address().to_string(),
            msg: to_json_binary(&ExecuteMsg::Deposit {})?,
            funds: vec![coin],
        }))
    }

    pub fn withdraw_msg(&self, amount: Uint128, recipient: &Addr) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.address().to_string(),
            msg: to_json_binary(&ExecuteMsg::Withdraw {
                amount,
                recipient: Some(recipient.to_string()),
            })?,
            funds: vec![],
        }))
    }

    /// Accept an ownership transfer previously proposed to the sending contract
    pub fn accept_ownership_msg(&self) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.address().to_string(),
            msg: to_json_binary(&ExecuteMsg::UpdateOwner(OwnerUpdate::AcceptProposed))?,
            funds: vec![],
        }))
    }

    pub fn query_config(&self, querier: &QuerierWrapper) -> StdResult<ConfigResponse> {
        querier.query_wasm_smart(self.address().to_string(), &QueryMsg::Config {})
    }
}

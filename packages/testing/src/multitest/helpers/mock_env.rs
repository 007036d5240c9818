use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, Coin, Decimal, Uint128};
use cw20::BalanceResponse;
use cw_multi_test::{App, AppResponse, BankSudo, BasicApp, Executor, SudoMsg};
use cw_paginate::PaginationResponse;
use mars_owner::{OwnerResponse, OwnerUpdate};
use stablevault_types::{
    reward_nft::{self, NftTier},
    stablecoin, vault,
    vault_manager::{
        ConfigResponse, ConfigUpdates, ExecuteMsg, QueryMsg, UserBalanceResponse,
        UserPositionResponse,
    },
};

use super::{MockEnvBuilder, DENOM};

pub struct MockEnv {
    pub app: BasicApp,
    pub deployer: Addr,
    pub stablecoin: Addr,
    pub vault: Addr,
    pub vault_manager: Addr,
    pub reward_nft: Addr,
    pub vault_code_id: u64,
}

#[allow(clippy::new_ret_no_self)]
impl MockEnv {
    pub fn new() -> MockEnvBuilder {
        MockEnvBuilder {
            app: App::default(),
            deployer: Addr::unchecked("deployer"),
            funded_accounts: vec![],
            stablecoin_supply: None,
            manager_yield_params: None,
            reward_threshold: None,
            link_reward_nft: true,
            setup_vaults: true,
            base_token_uri: None,
        }
    }

    pub fn fund_user(&mut self, user: &Addr, funds: &[Coin]) {
        self.app
            .sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: user.to_string(),
                amount: funds.to_vec(),
            }))
            .unwrap();
    }

    /// Instantiates another vault from the stored vault code
    pub fn deploy_vault(&mut self, owner: &Addr, denom: &str) -> AnyResult<Addr> {
        self.app.instantiate_contract(
            self.vault_code_id,
            owner.clone(),
            &vault::InstantiateMsg {
                owner: None,
                denom: denom.to_string(),
                yield_params: None,
            },
            &[],
            "stable-vault",
            None,
        )
    }

    //--------------------------------------------------------------------------------------------------
    // Vault manager
    //--------------------------------------------------------------------------------------------------

    pub fn deposit(&mut self, sender: &Addr, amount: u128) -> AnyResult<AppResponse> {
        self.deposit_with_funds(sender, &[coin(amount, DENOM)])
    }

    pub fn deposit_with_funds(&mut self, sender: &Addr, funds: &[Coin]) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::Deposit {},
            funds,
        )
    }

    pub fn withdraw(&mut self, sender: &Addr, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::Withdraw {
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn add_vault(&mut self, sender: &Addr, address: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::AddVault {
                address: address.to_string(),
            },
            &[],
        )
    }

    pub fn remove_vault(&mut self, sender: &Addr, address: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::RemoveVault {
                address: address.to_string(),
            },
            &[],
        )
    }

    pub fn update_manager_config(
        &mut self,
        sender: &Addr,
        updates: ConfigUpdates,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::UpdateConfig {
                updates,
            },
            &[],
        )
    }

    pub fn update_manager_owner(
        &mut self,
        sender: &Addr,
        update: OwnerUpdate,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::UpdateOwner(update),
            &[],
        )
    }

    pub fn accept_vault_ownership(
        &mut self,
        sender: &Addr,
        vault: &Addr,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault_manager.clone(),
            &ExecuteMsg::AcceptVaultOwnership {
                vault: vault.to_string(),
            },
            &[],
        )
    }

    //--------------------------------------------------------------------------------------------------
    // Vault
    //--------------------------------------------------------------------------------------------------

    pub fn vault_deposit(
        &mut self,
        sender: &Addr,
        vault: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            vault.clone(),
            &vault::ExecuteMsg::Deposit {},
            &[coin(amount, DENOM)],
        )
    }

    pub fn vault_withdraw(
        &mut self,
        sender: &Addr,
        vault: &Addr,
        amount: u128,
        recipient: Option<&Addr>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            vault.clone(),
            &vault::ExecuteMsg::Withdraw {
                amount: Uint128::new(amount),
                recipient: recipient.map(|r| r.to_string()),
            },
            &[],
        )
    }

    pub fn update_vault_owner(
        &mut self,
        sender: &Addr,
        vault: &Addr,
        update: OwnerUpdate,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            vault.clone(),
            &vault::ExecuteMsg::UpdateOwner(update),
            &[],
        )
    }

    //--------------------------------------------------------------------------------------------------
    // Reward NFT
    //--------------------------------------------------------------------------------------------------

    /// Mints a tier token as `sender` and returns its id
    pub fn mint_nft(
        &mut self,
        sender: &Addr,
        recipient: &Addr,
        tier: NftTier,
    ) -> AnyResult<String> {
        let recipient = recipient.to_string();
        let msg = match tier {
            NftTier::Genesis => reward_nft::ExecuteMsg::MintGenesis {
                recipient,
            },
            NftTier::Multiplier => reward_nft::ExecuteMsg::MintMultiplier {
                recipient,
            },
            NftTier::Access => reward_nft::ExecuteMsg::MintAccess {
                recipient,
            },
        };
        let res = self.app.execute_contract(sender.clone(), self.reward_nft.clone(), &msg, &[])?;
        Ok(super::get_wasm_attribute(&res, "token_id").unwrap_or_default())
    }

    pub fn transfer_nft(
        &mut self,
        sender: &Addr,
        recipient: &Addr,
        token_id: &str,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.reward_nft.clone(),
            &reward_nft::ExecuteMsg::TransferNft {
                recipient: recipient.to_string(),
                token_id: token_id.to_string(),
            },
            &[],
        )
    }

    pub fn burn_nft(&mut self, sender: &Addr, token_id: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.reward_nft.clone(),
            &reward_nft::ExecuteMsg::Burn {
                token_id: token_id.to_string(),
            },
            &[],
        )
    }

    //--------------------------------------------------------------------------------------------------
    // Stablecoin
    //--------------------------------------------------------------------------------------------------

    pub fn transfer_stablecoin(
        &mut self,
        sender: &Addr,
        recipient: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.stablecoin.clone(),
            &stablecoin::ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    //--------------------------------------------------------------------------------------------------
    // Queries
    //--------------------------------------------------------------------------------------------------

    pub fn query_balance(&self, addr: &Addr, denom: &str) -> Uint128 {
        self.app.wrap().query_balance(addr.clone(), denom).unwrap().amount
    }

    pub fn query_manager_ownership(&self) -> OwnerResponse {
        self.app.wrap().query_wasm_smart(self.vault_manager.clone(), &QueryMsg::Owner {}).unwrap()
    }

    pub fn query_manager_config(&self) -> ConfigResponse {
        self.app.wrap().query_wasm_smart(self.vault_manager.clone(), &QueryMsg::Config {}).unwrap()
    }

    pub fn query_is_vault(&self, address: &Addr) -> bool {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault_manager.clone(),
                &QueryMsg::IsVault {
                    address: address.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_vaults(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> PaginationResponse<String> {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault_manager.clone(),
                &QueryMsg::Vaults {
                    start_after,
                    limit,
                },
            )
            .unwrap()
    }

    pub fn query_total_balance(&self) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart(self.vault_manager.clone(), &QueryMsg::TotalBalance {})
            .unwrap()
    }

    pub fn query_user_balance(&self, user: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault_manager.clone(),
                &QueryMsg::UserBalance {
                    user: user.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_all_user_balances(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> PaginationResponse<UserBalanceResponse> {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault_manager.clone(),
                &QueryMsg::AllUserBalances {
                    start_after,
                    limit,
                },
            )
            .unwrap()
    }

    pub fn query_user_position(&self, user: &Addr) -> UserPositionResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault_manager.clone(),
                &QueryMsg::UserPosition {
                    user: user.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_global_apy(&self) -> Decimal {
        self.app
            .wrap()
            .query_wasm_smart(self.vault_manager.clone(), &QueryMsg::GlobalApy {})
            .unwrap()
    }

    pub fn query_vault_ownership(&self, vault: &Addr) -> OwnerResponse {
        self.app.wrap().query_wasm_smart(vault.clone(), &vault::QueryMsg::Owner {}).unwrap()
    }

    pub fn query_vault_total_balance(&self, vault: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart(vault.clone(), &vault::QueryMsg::TotalBalance {})
            .unwrap()
    }

    pub fn query_vault_apy(&self, vault: &Addr) -> Decimal {
        self.app.wrap().query_wasm_smart(vault.clone(), &vault::QueryMsg::Apy {}).unwrap()
    }

    pub fn query_user_boost(&self, user: &Addr) -> u32 {
        self.app
            .wrap()
            .query_wasm_smart(
                self.reward_nft.clone(),
                &reward_nft::QueryMsg::UserBoost {
                    user: user.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_nft_balance(&self, owner: &Addr) -> u64 {
        self.app
            .wrap()
            .query_wasm_smart(
                self.reward_nft.clone(),
                &reward_nft::QueryMsg::BalanceOf {
                    owner: owner.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_nft_supply(&self) -> u64 {
        let res: cw721::NumTokensResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.reward_nft.clone(), &reward_nft::QueryMsg::NumTokens {})
            .unwrap();
        res.count
    }

    pub fn query_stablecoin_balance(&self, addr: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.stablecoin.clone(),
                &stablecoin::QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance
    }
}

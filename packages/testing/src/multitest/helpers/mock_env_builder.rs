use std::mem::take;

use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Coin, Uint128};
use cw_multi_test::{BankSudo, BasicApp, Executor, SudoMsg};
use mars_owner::OwnerUpdate;
use stablevault_types::{reward_nft, stablecoin, vault, vault_manager};
use stablevault_yield::YieldParams;

use super::{
    mock_reward_nft_contract, mock_stablecoin_contract, mock_vault_contract,
    mock_vault_manager_contract, MockEnv, DENOM,
};

pub struct MockEnvBuilder {
    pub app: BasicApp,
    pub deployer: Addr,
    pub funded_accounts: Vec<(Addr, Vec<Coin>)>,
    pub stablecoin_supply: Option<Uint128>,
    pub manager_yield_params: Option<YieldParams>,
    pub reward_threshold: Option<Uint128>,
    pub link_reward_nft: bool,
    pub setup_vaults: bool,
    pub base_token_uri: Option<String>,
}

impl MockEnvBuilder {
    /// Deploys the suite the way a fresh network deployment does:
    /// stablecoin, vault, reward NFT and vault manager, then registers the
    /// vault in the manager and hands the vault ownership over to it.
    pub fn build(&mut self) -> AnyResult<MockEnv> {
        self.fund_accounts()?;

        let stablecoin = self.deploy_stablecoin()?;

        let vault_code_id = self.app.store_code(mock_vault_contract());
        let vault = self.deploy_vault(vault_code_id)?;
        let reward_nft = self.deploy_reward_nft()?;
        let vault_manager = self.deploy_vault_manager(&vault, &reward_nft)?;

        if self.setup_vaults {
            self.setup_vault(&vault_manager, &vault)?;
        }

        Ok(MockEnv {
            app: take(&mut self.app),
            deployer: self.deployer.clone(),
            stablecoin,
            vault,
            vault_manager,
            reward_nft,
            vault_code_id,
        })
    }

    fn fund_accounts(&mut self) -> AnyResult<()> {
        for (addr, funds) in take(&mut self.funded_accounts) {
            self.app.sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: addr.to_string(),
                amount: funds,
            }))?;
        }
        Ok(())
    }

    fn deploy_stablecoin(&mut self) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_stablecoin_contract());
        self.app.instantiate_contract(
            code_id,
            self.deployer.clone(),
            &stablecoin::InstantiateMsg {
                name: "Stable USD".to_string(),
                symbol: "SUSD".to_string(),
                decimals: 18,
                initial_supply: self.stablecoin_supply,
                cap: None,
            },
            &[],
            "stablecoin",
            None,
        )
    }

    fn deploy_vault(&mut self, code_id: u64) -> AnyResult<Addr> {
        self.app.instantiate_contract(
            code_id,
            self.deployer.clone(),
            &vault::InstantiateMsg {
                owner: None,
                denom: DENOM.to_string(),
                yield_params: None,
            },
            &[],
            "stable-vault",
            None,
        )
    }

    fn deploy_reward_nft(&mut self) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_reward_nft_contract());
        self.app.instantiate_contract(
            code_id,
            self.deployer.clone(),
            &reward_nft::InstantiateMsg {
                name: "StableVault Rewards".to_string(),
                symbol: "SVR".to_string(),
                minter: self.deployer.to_string(),
                base_token_uri: self.base_token_uri.clone(),
            },
            &[],
            "reward-nft",
            None,
        )
    }

    fn deploy_vault_manager(&mut self, vault: &Addr, reward_nft: &Addr) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_vault_manager_contract());
        self.app.instantiate_contract(
            code_id,
            self.deployer.clone(),
            &vault_manager::InstantiateMsg {
                owner: None,
                default_vault: vault.to_string(),
                reward_nft: self.link_reward_nft.then(|| reward_nft.to_string()),
                yield_params: self.manager_yield_params.clone(),
                reward_threshold: self.reward_threshold,
            },
            &[],
            "vault-manager",
            None,
        )
    }

    fn setup_vault(&mut self, vault_manager: &Addr, vault: &Addr) -> AnyResult<()> {
        self.app.execute_contract(
            self.deployer.clone(),
            vault_manager.clone(),
            &vault_manager::ExecuteMsg::AddVault {
                address: vault.to_string(),
            },
            &[],
        )?;

        self.app.execute_contract(
            self.deployer.clone(),
            vault.clone(),
            &vault::ExecuteMsg::UpdateOwner(OwnerUpdate::ProposeNewOwner {
                proposed: vault_manager.to_string(),
            }),
            &[],
        )?;

        self.app.execute_contract(
            self.deployer.clone(),
            vault_manager.clone(),
            &vault_manager::ExecuteMsg::AcceptVaultOwnership {
                vault: vault.to_string(),
            },
            &[],
        )?;

        Ok(())
    }

    //--------------------------------------------------------------------------------------------------
    // Setter functions
    //--------------------------------------------------------------------------------------------------

    pub fn fund_account(&mut self, account: &Addr, funds: &[Coin]) -> &mut Self {
        self.funded_accounts.push((account.clone(), funds.to_vec()));
        self
    }

    pub fn stablecoin_supply(&mut self, supply: u128) -> &mut Self {
        self.stablecoin_supply = Some(Uint128::new(supply));
        self
    }

    pub fn manager_yield_params(&mut self, params: YieldParams) -> &mut Self {
        self.manager_yield_params = Some(params);
        self
    }

    pub fn reward_threshold(&mut self, threshold: u128) -> &mut Self {
        self.reward_threshold = Some(Uint128::new(threshold));
        self
    }

    pub fn base_token_uri(&mut self, uri: &str) -> &mut Self {
        self.base_token_uri = Some(uri.to_string());
        self
    }

    /// Leave the manager without a reward NFT collection
    pub fn no_reward_nft(&mut self) -> &mut Self {
        self.link_reward_nft = false;
        self
    }

    /// Skip vault registration and the ownership handover
    pub fn no_vault_setup(&mut self) -> &mut Self {
        self.setup_vaults = false;
        self
    }
}

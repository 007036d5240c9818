use cosmwasm_std::{coin, Addr, Decimal, Uint128};
use mars_owner::OwnerError;
use stablevault_testing::multitest::helpers::{assert_err, MockEnv, DENOM};
use stablevault_types::vault_manager::ConfigUpdates;
use stablevault_utils::error::ValidationError;
use stablevault_vault_manager::error::ContractError;
use stablevault_yield::{YieldParams, ONE_TOKEN};

#[test]
fn only_owner_can_update_config() {
    let mut mock = MockEnv::new().build().unwrap();
    let bad_guy = Addr::unchecked("doctor_otto_983");

    let res = mock.update_manager_config(
        &bad_guy,
        ConfigUpdates {
            reward_threshold: Some(Uint128::one()),
            ..Default::default()
        },
    );
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
}

#[test]
fn empty_update_keeps_config() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.deployer.clone();
    let before = mock.query_manager_config();

    mock.update_manager_config(&owner, ConfigUpdates::default()).unwrap();
    assert_eq!(mock.query_manager_config(), before);
}

#[test]
fn update_reward_settings() {
    let mut mock = MockEnv::new().no_reward_nft().build().unwrap();
    let owner = mock.deployer.clone();
    let nft = mock.reward_nft.clone();

    mock.update_manager_config(
        &owner,
        ConfigUpdates {
            reward_nft: Some(nft.to_string()),
            reward_threshold: Some(Uint128::new(ONE_TOKEN)),
            ..Default::default()
        },
    )
    .unwrap();

    let config = mock.query_manager_config();
    assert_eq!(config.reward_nft, Some(nft.to_string()));
    assert_eq!(config.reward_threshold, Uint128::new(ONE_TOKEN));
}

#[test]
fn yield_params_are_validated() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.deployer.clone();

    let res = mock.update_manager_config(
        &owner,
        ConfigUpdates {
            yield_params: Some(YieldParams {
                base_apy: Decimal::percent(150),
                ..YieldParams::manager_default()
            }),
            ..Default::default()
        },
    );
    assert_err(
        res,
        ContractError::Validation(ValidationError::InvalidParam {
            param_name: "base_apy".to_string(),
            invalid_value: "1.5".to_string(),
            predicate: "<= 1".to_string(),
        }),
    );
}

#[test]
fn global_apy_follows_yield_params() {
    let whale = Addr::unchecked("whale");
    let mut mock = MockEnv::new()
        .fund_account(&whale, &[coin(2_000 * ONE_TOKEN, DENOM)])
        .build()
        .unwrap();
    let owner = mock.deployer.clone();

    mock.deposit(&whale, 1_000 * ONE_TOKEN).unwrap();
    assert_eq!(mock.query_global_apy(), Decimal::permille(125));

    mock.deposit(&whale, 1).unwrap();
    assert_eq!(mock.query_global_apy(), Decimal::permille(150));

    mock.update_manager_config(
        &owner,
        ConfigUpdates {
            yield_params: Some(YieldParams {
                base_apy: Decimal::percent(10),
                tvl_threshold: Uint128::new(5_000 * ONE_TOKEN),
                tvl_multiplier: Decimal::one(),
            }),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(mock.query_global_apy(), Decimal::percent(10));
}

#[test]
fn default_vault_change_requires_empty_manager() {
    let alice = Addr::unchecked("alice");
    let mut mock =
        MockEnv::new().fund_account(&alice, &[coin(1_000, DENOM)]).build().unwrap();
    let owner = mock.deployer.clone();
    let new_vault = mock.deploy_vault(&owner, "uusd").unwrap();

    mock.deposit(&alice, 1_000).unwrap();
    let res = mock.update_manager_config(
        &owner,
        ConfigUpdates {
            default_vault: Some(new_vault.to_string()),
            ..Default::default()
        },
    );
    assert_err(
        res,
        ContractError::DefaultVaultInUse {
            total_balance: Uint128::new(1_000),
        },
    );

    mock.withdraw(&alice, 1_000).unwrap();
    mock.update_manager_config(
        &owner,
        ConfigUpdates {
            default_vault: Some(new_vault.to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let config = mock.query_manager_config();
    assert_eq!(config.default_vault, new_vault.to_string());
    assert_eq!(config.denom, "uusd");
}

use cosmwasm_std::{coin, Addr, Uint128};
use cw_utils::PaymentError;
use stablevault_testing::multitest::helpers::{
    assert_err, get_wasm_attribute, MockEnv, DENOM,
};
use stablevault_vault_manager::error::ContractError;
use stablevault_yield::ONE_TOKEN;

#[test]
fn deposit_requires_funds() {
    let user = Addr::unchecked("alice");
    let mut mock = MockEnv::new().build().unwrap();

    let res = mock.deposit_with_funds(&user, &[]);
    assert_err(res, ContractError::Payment(PaymentError::NoFunds {}));
}

#[test]
fn deposit_rejects_other_denoms() {
    let user = Addr::unchecked("alice");
    let mut mock =
        MockEnv::new().fund_account(&user, &[coin(1_000, "uatom")]).build().unwrap();

    let res = mock.deposit_with_funds(&user, &[coin(1_000, "uatom")]);
    assert_err(res, ContractError::Payment(PaymentError::MissingDenom(DENOM.to_string())));
}

#[test]
fn deposit_is_forwarded_to_default_vault() {
    let user = Addr::unchecked("alice");
    let mut mock =
        MockEnv::new().fund_account(&user, &[coin(10 * ONE_TOKEN, DENOM)]).build().unwrap();

    let res = mock.deposit(&user, 2 * ONE_TOKEN).unwrap();
    assert_eq!(get_wasm_attribute(&res, "action").unwrap(), "deposit");
    assert_eq!(get_wasm_attribute(&res, "user_balance").unwrap(), (2 * ONE_TOKEN).to_string());
    assert_eq!(get_wasm_attribute(&res, "reward_eligible").unwrap(), "true");

    assert_eq!(mock.query_user_balance(&user), Uint128::new(2 * ONE_TOKEN));
    assert_eq!(mock.query_total_balance(), Uint128::new(2 * ONE_TOKEN));

    // coins sit in the vault, not in the manager
    let vault = mock.vault.clone();
    let manager = mock.vault_manager.clone();
    assert_eq!(mock.query_vault_total_balance(&vault), Uint128::new(2 * ONE_TOKEN));
    assert_eq!(mock.query_balance(&vault, DENOM), Uint128::new(2 * ONE_TOKEN));
    assert_eq!(mock.query_balance(&manager, DENOM), Uint128::zero());
    assert_eq!(mock.query_balance(&user, DENOM), Uint128::new(8 * ONE_TOKEN));
}

#[test]
fn balances_are_tracked_per_user() {
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");
    let mut mock = MockEnv::new()
        .fund_account(&alice, &[coin(1_000, DENOM)])
        .fund_account(&bob, &[coin(1_000, DENOM)])
        .build()
        .unwrap();

    mock.deposit(&alice, 100).unwrap();
    mock.deposit(&bob, 300).unwrap();
    mock.deposit(&alice, 50).unwrap();

    assert_eq!(mock.query_user_balance(&alice), Uint128::new(150));
    assert_eq!(mock.query_user_balance(&bob), Uint128::new(300));
    assert_eq!(mock.query_total_balance(), Uint128::new(450));

    let res = mock.deposit(&alice, 1).unwrap();
    assert_eq!(get_wasm_attribute(&res, "reward_eligible").unwrap(), "false");
}

#[test]
fn deposit_works_before_vault_handover() {
    let user = Addr::unchecked("alice");
    let mut mock = MockEnv::new()
        .no_vault_setup()
        .fund_account(&user, &[coin(1_000, DENOM)])
        .build()
        .unwrap();

    mock.deposit(&user, 1_000).unwrap();
    let vault = mock.vault.clone();
    assert_eq!(mock.query_vault_total_balance(&vault), Uint128::new(1_000));
}

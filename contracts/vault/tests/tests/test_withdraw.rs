use cosmwasm_std::{coin, Addr, Uint128};
use mars_owner::OwnerError;
use stablevault_vault::error::ContractError;
use test_case::test_case;

use super::helpers::{assert_err, MockEnv, DENOM};

fn funded_vault() -> MockEnv {
    let user = Addr::unchecked("alice");
    let mut mock = MockEnv::new().fund_account(&user, 1_000).build().unwrap();
    mock.deposit(&user, &[coin(1_000, DENOM)]).unwrap();
    mock
}

#[test]
fn only_owner_can_withdraw() {
    let mut mock = funded_vault();
    let depositor = Addr::unchecked("alice");

    let res = mock.withdraw(&depositor, 100, None);
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
}

#[test_case(
    0,
    ContractError::InvalidAmount {
        reason: "withdraw amount must be greater than 0".to_string(),
    };
    "zero amount"
)]
#[test_case(
    1_001,
    ContractError::InsufficientBalance {
        available: Uint128::new(1_000),
        requested: Uint128::new(1_001),
    };
    "more than total"
)]
fn invalid_withdraw_is_rejected(amount: u128, expected: ContractError) {
    let mut mock = funded_vault();
    let owner = mock.owner.clone();

    let res = mock.withdraw(&owner, amount, None);
    assert_err(res, expected);
    assert_eq!(mock.query_total_balance(), Uint128::new(1_000));
}

#[test]
fn owner_withdraws_to_self_by_default() {
    let mut mock = funded_vault();
    let owner = mock.owner.clone();

    mock.withdraw(&owner, 400, None).unwrap();

    assert_eq!(mock.query_total_balance(), Uint128::new(600));
    assert_eq!(mock.query_balance(&owner), Uint128::new(400));
}

#[test]
fn owner_withdraws_to_recipient() {
    let mut mock = funded_vault();
    let owner = mock.owner.clone();
    let recipient = Addr::unchecked("bob");

    mock.withdraw(&owner, 1_000, Some(recipient.as_str())).unwrap();

    assert_eq!(mock.query_total_balance(), Uint128::zero());
    assert_eq!(mock.query_balance(&recipient), Uint128::new(1_000));
    assert_eq!(mock.query_balance(&owner), Uint128::zero());
}

use cosmwasm_std::{Addr, Decimal, Uint128};
use mars_owner::OwnerError;
use stablevault_utils::error::ValidationError;
use stablevault_vault::error::ContractError;
use stablevault_yield::YieldParams;

use super::helpers::{assert_err, MockEnv};

fn new_params() -> YieldParams {
    YieldParams {
        base_apy: Decimal::percent(20),
        tvl_threshold: Uint128::new(10),
        tvl_multiplier: Decimal::one(),
    }
}

#[test]
fn only_owner_can_update_yield_params() {
    let mut mock = MockEnv::new().build().unwrap();
    let res = mock.update_yield_params(&Addr::unchecked("random"), new_params());
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
}

#[test]
fn yield_params_are_validated() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.owner.clone();

    let res = mock.update_yield_params(
        &owner,
        YieldParams {
            tvl_multiplier: Decimal::percent(50),
            ..new_params()
        },
    );
    assert_err(
        res,
        ContractError::Validation(ValidationError::InvalidParam {
            param_name: "tvl_multiplier".to_string(),
            invalid_value: "0.5".to_string(),
            predicate: ">= 1".to_string(),
        }),
    );
}

#[test]
fn owner_updates_yield_params() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.owner.clone();

    mock.update_yield_params(&owner, new_params()).unwrap();

    assert_eq!(mock.query_config().yield_params, new_params());
    assert_eq!(mock.query_apy(), Decimal::percent(20));
}

use cosmwasm_std::Uint128;
use cw2::query_contract_info;
use test_case::test_case;

use super::helpers::MockEnv;

#[test]
fn default_supply_goes_to_deployer() {
    let mock = MockEnv::new(None, None).unwrap();

    let info = mock.query_token_info();
    assert_eq!(info.name, "Stable USD");
    assert_eq!(info.symbol, "SUSD");
    assert_eq!(info.decimals, 18);

    let expected = Uint128::new(1_000_000) * Uint128::new(10u128.pow(18));
    assert_eq!(info.total_supply, expected);
    assert_eq!(mock.query_balance(&mock.deployer), expected);
}

#[test_case(0; "empty supply")]
#[test_case(42; "tiny supply")]
#[test_case(5_000_000_000_000_000_000; "custom supply")]
fn explicit_supply_goes_to_deployer(supply: u128) {
    let mock = MockEnv::new(Some(supply), None).unwrap();
    assert_eq!(mock.query_token_info().total_supply, Uint128::new(supply));
    assert_eq!(mock.query_balance(&mock.deployer), Uint128::new(supply));
}

#[test]
fn deployer_is_minter() {
    let mock = MockEnv::new(Some(100), Some(1_000)).unwrap();
    let minter = mock.query_minter().unwrap();
    assert_eq!(minter.minter, mock.deployer.to_string());
    assert_eq!(minter.cap, Some(Uint128::new(1_000)));
}

#[test]
fn initial_supply_above_cap_is_rejected() {
    let res = MockEnv::new(Some(1_001), Some(1_000));
    assert!(res.is_err());
}

#[test]
fn contract_version_is_recorded() {
    let mock = MockEnv::new(None, None).unwrap();
    let version = query_contract_info(&mock.app.wrap(), mock.token.clone()).unwrap();
    assert_eq!(version.contract, "crates.io:stablevault-stablecoin");
}

use cosmwasm_std::Addr;
use mars_owner::{OwnerError, OwnerUpdate};
use stablevault_testing::multitest::helpers::{assert_err, MockEnv, DENOM};
use stablevault_vault_manager::error::ContractError;

#[test]
fn manager_ownership_is_two_step() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.deployer.clone();
    let new_owner = Addr::unchecked("multisig");

    mock.update_manager_owner(
        &owner,
        OwnerUpdate::ProposeNewOwner {
            proposed: new_owner.to_string(),
        },
    )
    .unwrap();
    assert_eq!(mock.query_manager_ownership().proposed.unwrap(), new_owner.to_string());

    mock.update_manager_owner(&new_owner, OwnerUpdate::AcceptProposed).unwrap();
    assert_eq!(mock.query_manager_ownership().owner.unwrap(), new_owner.to_string());

    let vault = mock.deploy_vault(&new_owner, DENOM).unwrap();
    let res = mock.add_vault(&owner, &vault);
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
    mock.add_vault(&new_owner, &vault).unwrap();

    let res = mock.remove_vault(&owner, &vault);
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
    mock.remove_vault(&new_owner, &vault).unwrap();
}

#[test]
fn only_owner_can_accept_vault_ownership() {
    let mut mock = MockEnv::new().no_vault_setup().build().unwrap();
    let bad_guy = Addr::unchecked("doctor_otto_983");
    let vault = mock.vault.clone();

    let res = mock.accept_vault_ownership(&bad_guy, &vault);
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
}

#[test]
fn accepting_unproposed_vault_fails() {
    let mut mock = MockEnv::new().no_vault_setup().build().unwrap();
    let owner = mock.deployer.clone();
    let vault = mock.vault.clone();

    let res = mock.accept_vault_ownership(&owner, &vault);
    assert!(res.is_err());
    assert_eq!(mock.query_vault_ownership(&vault).owner.unwrap(), owner.to_string());
}

#[test]
fn vault_handover() {
    let mut mock = MockEnv::new().no_vault_setup().build().unwrap();
    let owner = mock.deployer.clone();
    let vault = mock.vault.clone();
    let manager = mock.vault_manager.clone();

    mock.update_vault_owner(
        &owner,
        &vault,
        OwnerUpdate::ProposeNewOwner {
            proposed: manager.to_string(),
        },
    )
    .unwrap();
    mock.accept_vault_ownership(&owner, &vault).unwrap();

    let ownership = mock.query_vault_ownership(&vault);
    assert_eq!(ownership.owner.unwrap(), manager.to_string());
    assert_eq!(ownership.proposed, None);
}

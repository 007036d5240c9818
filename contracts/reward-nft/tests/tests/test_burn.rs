use cosmwasm_std::Addr;
use cw721_base::{ContractError::Ownership, OwnershipError::NotOwner};
use stablevault_reward_nft::error::ContractError::BaseError;
use stablevault_types::reward_nft::NftTier;

use super::helpers::{assert_err, MockEnv};

#[test]
fn only_token_owner_can_burn() {
    let mut mock = MockEnv::new().build().unwrap();
    let alice = Addr::unchecked("alice");
    let token_id = mock.mint_tier(&alice, NftTier::Genesis).unwrap();

    let bad_guy = Addr::unchecked("doctor_otto_983");
    let res = mock.burn(&bad_guy, &token_id);
    assert_err(res, BaseError(Ownership(NotOwner)));

    assert_eq!(mock.query_token_tier(&token_id), Some(NftTier::Genesis));
    assert_eq!(mock.query_user_boost(&alice), 250);
}

#[test]
fn burning_removes_boost() {
    let mut mock = MockEnv::new().build().unwrap();
    let alice = Addr::unchecked("alice");
    let genesis = mock.mint_tier(&alice, NftTier::Genesis).unwrap();
    mock.mint_tier(&alice, NftTier::Access).unwrap();

    mock.burn(&alice, &genesis).unwrap();

    assert_eq!(mock.query_token_tier(&genesis), None);
    assert_eq!(mock.query_user_boost(&alice), 120);
    assert_eq!(mock.query_balance_of(&alice), 1);
    assert_eq!(mock.query_num_tokens(), 1);
}

#[test]
fn burned_ids_are_not_reused() {
    let mut mock = MockEnv::new().build().unwrap();
    let alice = Addr::unchecked("alice");
    let token_id = mock.mint_tier(&alice, NftTier::Access).unwrap();
    mock.burn(&alice, &token_id).unwrap();

    let next = mock.mint_tier(&alice, NftTier::Access).unwrap();
    assert_eq!(next, "2");
}

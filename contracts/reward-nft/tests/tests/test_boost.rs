use cosmwasm_std::Addr;
use stablevault_types::reward_nft::NftTier;
use strum::IntoEnumIterator;

use super::helpers::MockEnv;

#[test]
fn no_tokens_no_boost() {
    let mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("alice");

    assert_eq!(mock.query_user_boost(&user), 0);
    assert_eq!(mock.query_balance_of(&user), 0);
}

#[test]
fn boosts_per_tier() {
    let mut mock = MockEnv::new().build().unwrap();

    for tier in NftTier::iter() {
        let user = Addr::unchecked(format!("holder_of_{tier}"));
        mock.mint_tier(&user, tier).unwrap();
        assert_eq!(mock.query_user_boost(&user), tier.boost_bps());
    }

    assert_eq!(mock.query_user_boost(&Addr::unchecked("holder_of_genesis")), 250);
    assert_eq!(mock.query_user_boost(&Addr::unchecked("holder_of_multiplier")), 180);
    assert_eq!(mock.query_user_boost(&Addr::unchecked("holder_of_access")), 120);
}

#[test]
fn boosts_stack_across_tokens() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("alice");

    mock.mint_tier(&user, NftTier::Genesis).unwrap();
    mock.mint_tier(&user, NftTier::Genesis).unwrap();
    mock.mint_tier(&user, NftTier::Access).unwrap();
    let minter = mock.minter.clone();
    mock.mint(&minter, &user, None).unwrap();

    assert_eq!(mock.query_user_boost(&user), 250 + 250 + 120);
    assert_eq!(mock.query_balance_of(&user), 4);
}

#[test]
fn boost_follows_token_on_transfer() {
    let mut mock = MockEnv::new().build().unwrap();
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    let token_id = mock.mint_tier(&alice, NftTier::Multiplier).unwrap();
    mock.transfer(&alice, &bob, &token_id).unwrap();

    assert_eq!(mock.query_user_boost(&alice), 0);
    assert_eq!(mock.query_user_boost(&bob), 180);
    assert_eq!(mock.query_balance_of(&bob), 1);
    mock.assert_owner_is_correct(&bob, &token_id);
}

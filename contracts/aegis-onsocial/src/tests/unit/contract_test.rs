use crate::errors::AegisError;
use crate::tests::test_utils::*;
use crate::types::BadgePolicy;
use near_sdk::{testing_env, NearToken};

// --- End-to-end through the contract entrypoints ---

#[test]
fn follow_twice_keeps_single_badge() {
    let mut contract = new_contract(BadgePolicy::Minted);

    set_caller(&alice());
    contract.register("alice".into(), None).unwrap();
    set_caller(&bob());
    let influencer = contract.register("bob".into(), None).unwrap();

    set_caller(&alice());
    assert_eq!(contract.follow(bob()), Ok(true));
    assert_eq!(contract.badge_balance_of(influencer.collection_id, alice()), 1);

    assert_eq!(contract.follow(bob()), Ok(false));
    assert_eq!(contract.badge_balance_of(influencer.collection_id, alice()), 1);
    assert!(contract.is_follower(bob(), alice()));
}

#[test]
fn create_and_read_post() {
    let mut contract = new_contract(BadgePolicy::Minted);
    set_caller(&bob());
    contract.register("bob".into(), None).unwrap();

    let index = contract
        .create_post(
            "Hello world!".into(),
            vec!["att1".into(), "att2".into()],
            true,
        )
        .unwrap();

    assert_eq!(index, 0);
    assert_eq!(contract.get_post_count(bob()), 1);
    let post = contract.get_post(bob(), 0).unwrap();
    assert_eq!(post.text, "Hello world!");
    assert_eq!(post.attachments, vec!["att1", "att2"]);
    assert!(post.is_paid);
    assert_eq!(
        contract.get_post(bob(), 1),
        Err(AegisError::IndexOutOfRange { index: 1, count: 1 })
    );
}

#[test]
fn caller_identity_comes_from_predecessor() {
    let mut contract = new_contract(BadgePolicy::Minted);
    set_caller(&charlie());
    let account = contract.register("charlie".into(), None).unwrap();

    assert_eq!(account.account_id, charlie());
    assert!(contract.get_account(charlie()).is_some());
    assert!(contract.get_account(alice()).is_none());
    assert_eq!(contract.get_account_count(), 1);
}

#[test]
fn config_accessors() {
    let contract = new_contract(BadgePolicy::External);
    assert_eq!(contract.max_post_length(), crate::config::DEFAULT_MAX_POST_LENGTH);
    assert_eq!(
        contract.max_num_attachments(),
        crate::config::DEFAULT_MAX_NUM_ATTACHMENTS
    );
    assert_eq!(contract.get_badge_policy(), BadgePolicy::External);
    assert_eq!(contract.get_manager(), alice());
}

#[test]
fn external_collection_flow() {
    let mut contract = new_contract(BadgePolicy::External);

    set_caller(&alice());
    let collection_id = contract.create_collection();
    assert_eq!(contract.get_collection(collection_id).unwrap().owner_id, alice());
    contract
        .transfer_collection_ownership(collection_id, registry_id())
        .unwrap();

    let account = contract
        .register("sample username".into(), Some(collection_id))
        .unwrap();
    assert_eq!(account.collection_id, collection_id);
    assert_eq!(
        contract.get_collection(collection_id).unwrap().bound_to,
        Some(alice())
    );

    // The creator handed over mint rights.
    assert!(matches!(
        contract.mint_badge(collection_id, bob()),
        Err(AegisError::Unauthorized(_))
    ));
}

// --- Badge transfers ---

#[test]
fn transfer_badge_requires_one_yocto() {
    let mut contract = new_contract(BadgePolicy::Minted);
    set_caller(&alice());
    let influencer = contract.register("alice".into(), None).unwrap();
    set_caller(&bob());
    contract.register("bob".into(), None).unwrap();
    contract.follow(alice()).unwrap();

    assert_eq!(
        contract.transfer_badge(influencer.collection_id, 0, charlie()),
        Err(AegisError::RequiresOneYocto)
    );

    let mut ctx = context(&bob());
    ctx.attached_deposit(NearToken::from_yoctonear(1));
    testing_env!(ctx.build());
    contract
        .transfer_badge(influencer.collection_id, 0, charlie())
        .unwrap();

    assert_eq!(contract.badge_holder(influencer.collection_id, 0), Some(charlie()));
    assert!(!contract.is_follower(alice(), bob()));
    assert!(contract.is_follower(alice(), charlie()));
    assert_eq!(contract.badge_total_supply(influencer.collection_id), 1);
}

#[test]
fn refollow_after_transfer_through_contract() {
    let mut contract = new_contract(BadgePolicy::Minted);
    set_caller(&alice());
    let influencer = contract.register("sample influencer".into(), None).unwrap();
    set_caller(&bob());
    contract.register("sample follower 1".into(), None).unwrap();
    set_caller(&charlie());
    contract.register("sample follower 2".into(), None).unwrap();

    let mut ctx = context(&bob());
    ctx.attached_deposit(NearToken::from_yoctonear(1));
    testing_env!(ctx.build());
    contract.follow(alice()).unwrap();
    contract
        .transfer_badge(influencer.collection_id, 0, charlie())
        .unwrap();
    assert_eq!(contract.follow(alice()), Ok(true));

    assert_eq!(contract.badge_balance_of(influencer.collection_id, bob()), 1);
    assert_eq!(contract.badge_balance_of(influencer.collection_id, charlie()), 1);
}

#[test]
fn registry_account_cannot_bypass_follow() {
    let mut contract = new_contract(BadgePolicy::Minted);
    set_caller(&alice());
    let influencer = contract.register("alice".into(), None).unwrap();
    set_caller(&bob());
    contract.register("bob".into(), None).unwrap();

    set_caller(&registry_id());
    assert!(matches!(
        contract.mint_badge(influencer.collection_id, bob()),
        Err(AegisError::Unauthorized(_))
    ));
    assert!(matches!(
        contract.transfer_collection_ownership(influencer.collection_id, charlie()),
        Err(AegisError::Unauthorized(_))
    ));
    assert!(!contract.is_follower(alice(), bob()));
    assert_eq!(
        contract.get_collection(influencer.collection_id).unwrap().owner_id,
        registry_id()
    );

    set_caller(&bob());
    assert_eq!(contract.follow(alice()), Ok(true));
    assert!(contract.is_follower(alice(), bob()));
}

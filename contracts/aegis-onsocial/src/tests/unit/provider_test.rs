use crate::errors::AegisError;
use crate::tests::test_utils::*;
use crate::types::BadgePolicy;

#[test]
fn external_policy_adopts_handed_over_collection() {
    let mut state = new_state(BadgePolicy::External);
    let collection_id = handed_over_collection(&mut state, &alice());

    set_caller(&alice());
    let account = state
        .register(&alice(), "sample username".into(), Some(collection_id))
        .unwrap();

    assert_eq!(account.display_name, "sample username");
    assert_eq!(account.collection_id, collection_id);
    assert_eq!(
        state.badges.collection(collection_id).unwrap().bound_to,
        Some(alice())
    );
}

#[test]
fn external_policy_rejects_duplicate_account() {
    let mut state = new_state(BadgePolicy::External);
    let collection_1 = handed_over_collection(&mut state, &alice());
    let collection_2 = handed_over_collection(&mut state, &alice());

    set_caller(&alice());
    state
        .register(&alice(), "sample username 1".into(), Some(collection_1))
        .unwrap();
    assert_eq!(
        state.register(&alice(), "sample username 2".into(), Some(collection_2)),
        Err(AegisError::DuplicateAccount(alice()))
    );
    assert_eq!(state.badges.collection(collection_2).unwrap().bound_to, None);
}

#[test]
fn external_policy_rejects_collection_not_owned_by_registry() {
    let mut state = new_state(BadgePolicy::External);
    set_caller(&alice());
    let collection_id = state.badges.create_collection(&alice());

    assert_eq!(
        state.register(&alice(), "sample username".into(), Some(collection_id)),
        Err(AegisError::CollectionNotOwned {
            collection_id,
            owner_id: alice(),
        })
    );
    assert!(state.lookup(&alice()).is_none());
}

#[test]
fn external_policy_rejects_collection_with_minted_badges() {
    let mut state = new_state(BadgePolicy::External);
    set_caller(&alice());
    let collection_id = state.badges.create_collection(&alice());
    state.badges.mint(&alice(), collection_id, &bob()).unwrap();
    state
        .badges
        .transfer_ownership(&alice(), collection_id, registry_id())
        .unwrap();

    assert_eq!(
        state.register(&alice(), "sample username".into(), Some(collection_id)),
        Err(AegisError::CollectionNotEmpty {
            collection_id,
            total_supply: 1,
        })
    );
    assert!(state.lookup(&alice()).is_none());
}

#[test]
fn external_policy_rejects_collection_bound_to_another_account() {
    let mut state = new_state(BadgePolicy::External);
    let collection_id = handed_over_collection(&mut state, &alice());

    set_caller(&alice());
    state
        .register(&alice(), "alice".into(), Some(collection_id))
        .unwrap();

    set_caller(&bob());
    assert_eq!(
        state.register(&bob(), "bob".into(), Some(collection_id)),
        Err(AegisError::CollectionInUse {
            collection_id,
            account_id: alice(),
        })
    );
}

#[test]
fn external_policy_requires_a_collection() {
    let mut state = new_state(BadgePolicy::External);
    assert_eq!(
        state.register(&alice(), "alice".into(), None),
        Err(AegisError::CollectionRequired)
    );
}

#[test]
fn external_policy_rejects_unknown_collection() {
    let mut state = new_state(BadgePolicy::External);
    assert_eq!(
        state.register(&alice(), "alice".into(), Some(42)),
        Err(AegisError::CollectionNotFound(42))
    );
    assert_eq!(state.get_account_count(), 0);
}

#[test]
fn external_policy_never_creates_collections() {
    let mut state = new_state(BadgePolicy::External);
    let collection_id = handed_over_collection(&mut state, &bob());

    set_caller(&bob());
    state.register(&bob(), "bob".into(), Some(collection_id)).unwrap();
    assert_eq!(state.badges.next_collection_id, collection_id + 1);
}

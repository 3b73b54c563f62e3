use near_sdk::{near, AccountId};

use crate::types::{CollectionId, TokenId};

#[near(event_json(standard = "nep297"))]
pub enum AegisEvent {
    #[event_version("1.0.0")]
    AccountCreated {
        account_id: AccountId,
        display_name: String,
        collection_id: CollectionId,
    },
    #[event_version("1.0.0")]
    UserFollowed {
        follower_id: AccountId,
        followed_id: AccountId,
        collection_id: CollectionId,
        token_id: TokenId,
    },
    #[event_version("1.0.0")]
    PostCreated {
        author_id: AccountId,
        index: u64,
        text: String,
        attachments: Vec<String>,
        is_paid: bool,
        timestamp: u64,
    },
    #[event_version("1.0.0")]
    CollectionCreated { collection_id: CollectionId, owner_id: AccountId },
    #[event_version("1.0.0")]
    CollectionOwnershipTransferred {
        collection_id: CollectionId,
        old_owner_id: AccountId,
        new_owner_id: AccountId,
    },
    #[event_version("1.0.0")]
    BadgeMinted {
        collection_id: CollectionId,
        token_id: TokenId,
        holder_id: AccountId,
    },
    #[event_version("1.0.0")]
    BadgeTransferred {
        collection_id: CollectionId,
        token_id: TokenId,
        old_holder_id: AccountId,
        new_holder_id: AccountId,
    },
    #[event_version("1.0.0")]
    ContractUpgraded { manager: AccountId, timestamp: u64 },
    #[event_version("1.0.0")]
    ManagerChanged { old_manager: AccountId, new_manager: AccountId, timestamp: u64 },
    #[event_version("1.0.0")]
    StateMigrated { old_version: String, new_version: String },
}

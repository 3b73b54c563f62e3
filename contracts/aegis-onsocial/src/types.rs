use near_sdk::{near, AccountId};

pub type CollectionId = u64;
pub type TokenId = u64;

/// A registered Aegis user.
#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub account_id: AccountId,
    pub display_name: String,
    /// The account's own follower-badge collection.
    pub collection_id: CollectionId,
    pub created_at: u64,
}

#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub author_id: AccountId,
    pub text: String,
    pub attachments: Vec<String>,
    pub is_paid: bool,
    pub timestamp: u64,
}

#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeCollection {
    /// Only the owner may mint directly. Collections serving an Aegis
    /// account are owned by the contract account.
    pub owner_id: AccountId,
    pub bound_to: Option<AccountId>,
    /// Badges ever minted; token ids are `0..total_supply`.
    pub total_supply: u64,
    pub created_at: u64,
}

#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub holder_id: AccountId,
    pub minted_at: u64,
}

/// How a new account obtains its badge collection.
#[near(serializers = [json, borsh])]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgePolicy {
    /// Aegis creates a fresh collection for every account.
    #[default]
    Minted,
    /// The caller supplies an empty collection already handed over to Aegis.
    External,
}

use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::LookupMap;
use near_sdk::{env, log, AccountId};

use crate::errors::AegisError;
use crate::events::AegisEvent;
use crate::state::StorageKey;
use crate::types::{Badge, BadgeCollection, CollectionId, TokenId};

/// Non-fungible follower badges, grouped into collections.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct BadgeLedger {
    pub collections: LookupMap<CollectionId, BadgeCollection>,
    pub badges: LookupMap<(CollectionId, TokenId), Badge>,
    pub balances: LookupMap<(CollectionId, AccountId), u64>,
    pub next_collection_id: CollectionId,
}

impl BadgeLedger {
    pub fn new() -> Self {
        Self {
            collections: LookupMap::new(StorageKey::Collections),
            badges: LookupMap::new(StorageKey::Badges),
            balances: LookupMap::new(StorageKey::BadgeBalances),
            next_collection_id: 0,
        }
    }

    pub fn collection(&self, collection_id: CollectionId) -> Result<&BadgeCollection, AegisError> {
        self.collections
            .get(&collection_id)
            .ok_or(AegisError::CollectionNotFound(collection_id))
    }

    pub fn create_collection(&mut self, caller: &AccountId) -> CollectionId {
        self.insert_collection(caller.clone(), None)
    }

    pub(crate) fn insert_collection(
        &mut self,
        owner_id: AccountId,
        bound_to: Option<AccountId>,
    ) -> CollectionId {
        let collection_id = self.next_collection_id;
        self.next_collection_id += 1;
        self.collections.insert(
            collection_id,
            BadgeCollection {
                owner_id: owner_id.clone(),
                bound_to,
                total_supply: 0,
                created_at: env::block_timestamp_ms(),
            },
        );
        AegisEvent::CollectionCreated {
            collection_id,
            owner_id,
        }
        .emit();
        collection_id
    }

    pub(crate) fn bind(
        &mut self,
        collection_id: CollectionId,
        account_id: &AccountId,
    ) -> Result<(), AegisError> {
        let collection = self
            .collections
            .get_mut(&collection_id)
            .ok_or(AegisError::CollectionNotFound(collection_id))?;
        collection.bound_to = Some(account_id.clone());
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        collection_id: CollectionId,
        new_owner_id: AccountId,
    ) -> Result<(), AegisError> {
        let collection = self
            .collections
            .get_mut(&collection_id)
            .ok_or(AegisError::CollectionNotFound(collection_id))?;
        if &collection.owner_id != caller {
            return Err(AegisError::Unauthorized(
                "only the collection owner can transfer ownership".into(),
            ));
        }
        if let Some(account_id) = &collection.bound_to {
            return Err(AegisError::Unauthorized(format!(
                "collection {} is bound to {}",
                collection_id, account_id
            )));
        }
        let old_owner_id = std::mem::replace(&mut collection.owner_id, new_owner_id.clone());
        AegisEvent::CollectionOwnershipTransferred {
            collection_id,
            old_owner_id,
            new_owner_id,
        }
        .emit();
        Ok(())
    }

    /// Owner mint for unbound collections. Badges of a bound collection are
    /// only issued by `follow`.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        collection_id: CollectionId,
        receiver_id: &AccountId,
    ) -> Result<TokenId, AegisError> {
        let collection = self.collection(collection_id)?;
        if &collection.owner_id != caller {
            return Err(AegisError::Unauthorized(
                "only the collection owner can mint".into(),
            ));
        }
        if let Some(account_id) = &collection.bound_to {
            return Err(AegisError::Unauthorized(format!(
                "collection {} is bound to {}",
                collection_id, account_id
            )));
        }
        self.issue(collection_id, receiver_id)
    }

    pub(crate) fn issue(
        &mut self,
        collection_id: CollectionId,
        receiver_id: &AccountId,
    ) -> Result<TokenId, AegisError> {
        let collection = self
            .collections
            .get_mut(&collection_id)
            .ok_or(AegisError::CollectionNotFound(collection_id))?;
        let token_id = collection.total_supply;
        collection.total_supply += 1;

        self.badges.insert(
            (collection_id, token_id),
            Badge {
                holder_id: receiver_id.clone(),
                minted_at: env::block_timestamp_ms(),
            },
        );
        self.credit(collection_id, receiver_id);

        log!(
            "Minted badge {} of collection {} to {}",
            token_id,
            collection_id,
            receiver_id
        );
        AegisEvent::BadgeMinted {
            collection_id,
            token_id,
            holder_id: receiver_id.clone(),
        }
        .emit();
        Ok(token_id)
    }

    pub fn transfer(
        &mut self,
        caller: &AccountId,
        collection_id: CollectionId,
        token_id: TokenId,
        receiver_id: &AccountId,
    ) -> Result<(), AegisError> {
        let badge = self
            .badges
            .get_mut(&(collection_id, token_id))
            .ok_or(AegisError::BadgeNotFound {
                collection_id,
                token_id,
            })?;
        if &badge.holder_id != caller {
            return Err(AegisError::NotBadgeHolder {
                collection_id,
                token_id,
                account_id: caller.clone(),
            });
        }
        if receiver_id == caller {
            return Err(AegisError::SelfTransfer);
        }
        badge.holder_id = receiver_id.clone();

        self.debit(collection_id, caller);
        self.credit(collection_id, receiver_id);

        AegisEvent::BadgeTransferred {
            collection_id,
            token_id,
            old_holder_id: caller.clone(),
            new_holder_id: receiver_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub fn balance_of(&self, collection_id: CollectionId, account_id: &AccountId) -> u64 {
        self.balances
            .get(&(collection_id, account_id.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_supply(&self, collection_id: CollectionId) -> u64 {
        self.collections
            .get(&collection_id)
            .map_or(0, |collection| collection.total_supply)
    }

    pub fn holder_of(&self, collection_id: CollectionId, token_id: TokenId) -> Option<AccountId> {
        self.badges
            .get(&(collection_id, token_id))
            .map(|badge| badge.holder_id.clone())
    }

    fn credit(&mut self, collection_id: CollectionId, account_id: &AccountId) {
        let key = (collection_id, account_id.clone());
        let balance = self.balances.get(&key).copied().unwrap_or(0);
        self.balances.insert(key, balance + 1);
    }

    fn debit(&mut self, collection_id: CollectionId, account_id: &AccountId) {
        let key = (collection_id, account_id.clone());
        match self.balances.get(&key).copied().unwrap_or(0) {
            0 | 1 => {
                self.balances.remove(&key);
            }
            balance => {
                self.balances.insert(key, balance - 1);
            }
        }
    }
}

impl Default for BadgeLedger {
    fn default() -> Self {
        Self::new()
    }
}

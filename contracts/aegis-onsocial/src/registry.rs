use near_sdk::store::Vector;
use near_sdk::{env, log, AccountId};

use crate::config::MAX_PAGE_LIMIT;
use crate::errors::AegisError;
use crate::events::AegisEvent;
use crate::state::{AegisState, StorageKey};
use crate::types::{Account, CollectionId};

impl AegisState {
    pub fn register(
        &mut self,
        caller: &AccountId,
        display_name: String,
        collection_id: Option<CollectionId>,
    ) -> Result<Account, AegisError> {
        log!("Registering account: {}", caller);
        if self.accounts.contains_key(caller) {
            return Err(AegisError::DuplicateAccount(caller.clone()));
        }
        self.config.check_display_name(&display_name)?;

        let collection_id = self.badge_policy.provider().provision(
            &mut self.badges,
            &env::current_account_id(),
            caller,
            collection_id,
        )?;

        let account = Account {
            account_id: caller.clone(),
            display_name,
            collection_id,
            created_at: env::block_timestamp_ms(),
        };
        self.accounts.insert(caller.clone(), account.clone());
        self.registered_accounts.push(caller.clone());
        self.posts.insert(
            caller.clone(),
            Vector::new(StorageKey::PostList {
                account_id: caller.clone(),
            }),
        );

        AegisEvent::AccountCreated {
            account_id: caller.clone(),
            display_name: account.display_name.clone(),
            collection_id,
        }
        .emit();

        Ok(account)
    }

    pub fn lookup(&self, account_id: &AccountId) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    pub fn require_registered(&self, account_id: &AccountId) -> Result<&Account, AegisError> {
        self.lookup(account_id)
            .ok_or_else(|| AegisError::UnknownAccount(account_id.clone()))
    }

    pub fn get_account_count(&self) -> u32 {
        self.registered_accounts.len()
    }

    pub fn get_accounts(&self, limit: u32, offset: u32) -> Vec<Account> {
        assert!(limit <= MAX_PAGE_LIMIT, "Limit exceeds maximum allowed value");
        self.registered_accounts
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .filter_map(|account_id| self.accounts.get(account_id).cloned())
            .collect()
    }
}

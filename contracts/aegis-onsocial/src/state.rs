use crate::badges::BadgeLedger;
use crate::config::AegisConfig;
use crate::errors::AegisError;
use crate::events::AegisEvent;
use crate::types::{Account, BadgePolicy, Post};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{LookupMap, Vector};
use near_sdk::{env, log, AccountId, BorshStorageKey, Gas, NearToken, Promise};
use semver::Version;

const CALL_GAS: Gas = Gas::from_tgas(200);
const NO_ARGS: Vec<u8> = vec![];
const STATE_KEY: &[u8] = b"STATE";

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Accounts,
    RegisteredAccounts,
    Posts,
    PostList { account_id: AccountId },
    Collections,
    Badges,
    BadgeBalances,
}

#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct AegisState {
    pub version: String,
    pub manager: AccountId,
    pub config: AegisConfig,
    pub badge_policy: BadgePolicy,
    pub accounts: LookupMap<AccountId, Account>,
    pub registered_accounts: Vector<AccountId>,
    pub posts: LookupMap<AccountId, Vector<Post>>,
    pub badges: BadgeLedger,
}

impl AegisState {
    pub fn new(
        manager: AccountId,
        badge_policy: BadgePolicy,
        config: AegisConfig,
    ) -> Result<Self, AegisError> {
        config.validate()?;
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            manager,
            config,
            badge_policy,
            accounts: LookupMap::new(StorageKey::Accounts),
            registered_accounts: Vector::new(StorageKey::RegisteredAccounts),
            posts: LookupMap::new(StorageKey::Posts),
            badges: BadgeLedger::new(),
        })
    }

    pub fn update_contract(&mut self, caller: &AccountId) -> Result<Promise, AegisError> {
        if caller != &self.manager {
            return Err(AegisError::Unauthorized(
                "only the manager can upgrade the contract".into(),
            ));
        }
        let code = env::input()
            .filter(|input| !input.is_empty())
            .ok_or(AegisError::MissingInput)?;
        log!("Upgrading contract by manager: {}", self.manager);
        AegisEvent::ContractUpgraded {
            manager: self.manager.clone(),
            timestamp: env::block_timestamp_ms(),
        }
        .emit();
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                NO_ARGS,
                NearToken::from_near(0),
                CALL_GAS,
            ))
    }

    pub fn set_manager(
        &mut self,
        caller: &AccountId,
        new_manager: AccountId,
    ) -> Result<(), AegisError> {
        if caller != &self.manager {
            return Err(AegisError::Unauthorized(
                "only the manager can change the manager".into(),
            ));
        }
        log!("Changing manager from {} to {}", caller, new_manager);
        self.manager = new_manager.clone();
        AegisEvent::ManagerChanged {
            old_manager: caller.clone(),
            new_manager,
            timestamp: env::block_timestamp_ms(),
        }
        .emit();
        Ok(())
    }

    pub fn migrate() -> Self {
        Self::try_migrate().unwrap_or_else(|err| env::panic_str(&err.to_string()))
    }

    /// Upgrades the stored state in place. Fresh state is only created when
    /// nothing is stored; existing collections and accounts must never be
    /// shadowed by a new state reusing the same storage prefixes.
    pub(crate) fn try_migrate() -> Result<Self, AegisError> {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
        let current_version = Version::parse(CURRENT_VERSION)
            .map_err(|_| AegisError::InvalidState("invalid current version".into()))?;

        let Some(state_bytes) = env::storage_read(STATE_KEY) else {
            env::log_str("No prior state found, initializing new state");
            return Self::new(
                env::current_account_id(),
                BadgePolicy::default(),
                AegisConfig::default(),
            );
        };

        let mut state = borsh::from_slice::<AegisState>(&state_bytes).map_err(|_| {
            AegisError::InvalidState("prior state could not be decoded".into())
        })?;
        let state_version = Version::parse(&state.version).map_err(|_| {
            AegisError::InvalidState(format!("unknown state version {}", state.version))
        })?;

        if state_version >= current_version {
            env::log_str("State is at current or newer version, no migration needed");
            return Ok(state);
        }
        env::log_str(&format!("Migrating from state version {}", state.version));
        let old_version = std::mem::replace(&mut state.version, CURRENT_VERSION.to_string());
        AegisEvent::StateMigrated {
            old_version,
            new_version: CURRENT_VERSION.to_string(),
        }
        .emit();
        Ok(state)
    }
}

use crate::config::AegisConfig;
use crate::errors::AegisError;
use crate::state::AegisState;
use crate::types::{Account, BadgeCollection, BadgePolicy, CollectionId, Post, TokenId};
use near_sdk::{env, near, AccountId, PanicOnDefault, Promise};

pub mod badges;
pub mod config;
pub mod errors;
mod events;
mod guards;
mod posts;
mod registry;
pub mod state;
pub mod types;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct AegisContract {
    state: AegisState,
}

#[near]
impl AegisContract {
    #[init]
    #[handle_result]
    pub fn new(badge_policy: BadgePolicy, config: Option<AegisConfig>) -> Result<Self, AegisError> {
        let state = AegisState::new(
            env::predecessor_account_id(),
            badge_policy,
            config.unwrap_or_default(),
        )?;
        Ok(Self { state })
    }

    // --- Identity registry ---

    #[handle_result]
    pub fn register(
        &mut self,
        display_name: String,
        collection_id: Option<CollectionId>,
    ) -> Result<Account, AegisError> {
        self.state
            .register(&env::predecessor_account_id(), display_name, collection_id)
    }

    pub fn get_account(&self, account_id: AccountId) -> Option<Account> {
        self.state.lookup(&account_id).cloned()
    }

    pub fn get_account_count(&self) -> u32 {
        self.state.get_account_count()
    }

    pub fn get_accounts(&self, limit: u32, offset: u32) -> Vec<Account> {
        self.state.get_accounts(limit, offset)
    }

    // --- Followers ---

    #[handle_result]
    pub fn follow(&mut self, target_id: AccountId) -> Result<bool, AegisError> {
        self.state.follow(&env::predecessor_account_id(), &target_id)
    }

    pub fn is_follower(&self, target_id: AccountId, candidate_id: AccountId) -> bool {
        self.state.is_follower(&target_id, &candidate_id)
    }

    // --- Posts ---

    #[handle_result]
    pub fn create_post(
        &mut self,
        text: String,
        attachments: Vec<String>,
        is_paid: bool,
    ) -> Result<u64, AegisError> {
        self.state
            .create_post(&env::predecessor_account_id(), text, attachments, is_paid)
    }

    pub fn get_post_count(&self, account_id: AccountId) -> u64 {
        self.state.get_post_count(&account_id)
    }

    #[handle_result]
    pub fn get_post(&self, account_id: AccountId, index: u64) -> Result<Post, AegisError> {
        self.state.get_post(&account_id, index)
    }

    pub fn get_posts(&self, account_id: AccountId, from_index: u64, limit: u32) -> Vec<Post> {
        self.state.get_posts(&account_id, from_index, limit)
    }

    pub fn max_post_length(&self) -> u32 {
        self.state.config.max_post_length
    }

    pub fn max_num_attachments(&self) -> u32 {
        self.state.config.max_num_attachments
    }

    pub fn get_config(&self) -> AegisConfig {
        self.state.config.clone()
    }

    pub fn get_badge_policy(&self) -> BadgePolicy {
        self.state.badge_policy
    }

    // --- Badge collections ---

    pub fn create_collection(&mut self) -> CollectionId {
        self.state
            .badges
            .create_collection(&env::predecessor_account_id())
    }

    #[handle_result]
    pub fn transfer_collection_ownership(
        &mut self,
        collection_id: CollectionId,
        new_owner_id: AccountId,
    ) -> Result<(), AegisError> {
        self.state.badges.transfer_ownership(
            &env::predecessor_account_id(),
            collection_id,
            new_owner_id,
        )
    }

    #[handle_result]
    pub fn mint_badge(
        &mut self,
        collection_id: CollectionId,
        receiver_id: AccountId,
    ) -> Result<TokenId, AegisError> {
        self.state
            .badges
            .mint(&env::predecessor_account_id(), collection_id, &receiver_id)
    }

    #[payable]
    #[handle_result]
    pub fn transfer_badge(
        &mut self,
        collection_id: CollectionId,
        token_id: TokenId,
        receiver_id: AccountId,
    ) -> Result<(), AegisError> {
        guards::check_one_yocto()?;
        self.state.badges.transfer(
            &env::predecessor_account_id(),
            collection_id,
            token_id,
            &receiver_id,
        )
    }

    pub fn badge_balance_of(&self, collection_id: CollectionId, account_id: AccountId) -> u64 {
        self.state.badges.balance_of(collection_id, &account_id)
    }

    pub fn badge_total_supply(&self, collection_id: CollectionId) -> u64 {
        self.state.badges.total_supply(collection_id)
    }

    pub fn badge_holder(&self, collection_id: CollectionId, token_id: TokenId) -> Option<AccountId> {
        self.state.badges.holder_of(collection_id, token_id)
    }

    pub fn get_collection(&self, collection_id: CollectionId) -> Option<BadgeCollection> {
        self.state.badges.collections.get(&collection_id).cloned()
    }

    // --- Administration ---

    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, AegisError> {
        self.state.update_contract(&env::predecessor_account_id())
    }

    #[handle_result]
    pub fn set_manager(&mut self, new_manager: AccountId) -> Result<(), AegisError> {
        self.state
            .set_manager(&env::predecessor_account_id(), new_manager)
    }

    pub fn get_manager(&self) -> AccountId {
        self.state.manager.clone()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: AegisState::migrate(),
        }
    }
}

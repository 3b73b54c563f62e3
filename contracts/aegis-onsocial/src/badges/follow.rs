use near_sdk::{log, AccountId};

use crate::errors::AegisError;
use crate::events::AegisEvent;
use crate::state::AegisState;

impl AegisState {
    /// Mints a badge of `target_id`'s collection to `caller` unless the caller
    /// already holds one. Returns whether a badge was minted.
    pub fn follow(&mut self, caller: &AccountId, target_id: &AccountId) -> Result<bool, AegisError> {
        self.require_registered(caller)
            .map_err(|_| AegisError::CallerNotRegistered(caller.clone()))?;
        let collection_id = self
            .require_registered(target_id)
            .map_err(|_| AegisError::TargetNotRegistered(target_id.clone()))?
            .collection_id;

        if self.badges.balance_of(collection_id, caller) > 0 {
            log!("{} already follows {}", caller, target_id);
            return Ok(false);
        }

        let token_id = self.badges.issue(collection_id, caller)?;

        AegisEvent::UserFollowed {
            follower_id: caller.clone(),
            followed_id: target_id.clone(),
            collection_id,
            token_id,
        }
        .emit();
        Ok(true)
    }

    pub fn is_follower(&self, target_id: &AccountId, candidate_id: &AccountId) -> bool {
        self.lookup(target_id).is_some_and(|target| {
            self.badges.balance_of(target.collection_id, candidate_id) > 0
        })
    }
}

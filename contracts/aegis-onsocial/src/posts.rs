use near_sdk::{env, AccountId};

use crate::config::MAX_PAGE_LIMIT;
use crate::errors::AegisError;
use crate::events::AegisEvent;
use crate::state::AegisState;
use crate::types::Post;

impl AegisState {
    /// Appends a post to the caller's list and returns its index.
    pub fn create_post(
        &mut self,
        caller: &AccountId,
        text: String,
        attachments: Vec<String>,
        is_paid: bool,
    ) -> Result<u64, AegisError> {
        self.require_registered(caller)
            .map_err(|_| AegisError::CallerNotRegistered(caller.clone()))?;
        self.config.check_post(&text, &attachments)?;

        let posts = self
            .posts
            .get_mut(caller)
            .ok_or_else(|| AegisError::CallerNotRegistered(caller.clone()))?;
        let index = posts.len() as u64;
        let post = Post {
            author_id: caller.clone(),
            text,
            attachments,
            is_paid,
            timestamp: env::block_timestamp_ms(),
        };

        AegisEvent::PostCreated {
            author_id: caller.clone(),
            index,
            text: post.text.clone(),
            attachments: post.attachments.clone(),
            is_paid,
            timestamp: post.timestamp,
        }
        .emit();
        posts.push(post);

        Ok(index)
    }

    pub fn get_post_count(&self, account_id: &AccountId) -> u64 {
        self.posts
            .get(account_id)
            .map_or(0, |posts| posts.len() as u64)
    }

    pub fn get_post(&self, account_id: &AccountId, index: u64) -> Result<Post, AegisError> {
        let count = self.get_post_count(account_id);
        if index >= count {
            return Err(AegisError::IndexOutOfRange { index, count });
        }
        self.posts
            .get(account_id)
            .and_then(|posts| posts.get(index as u32))
            .cloned()
            .ok_or(AegisError::IndexOutOfRange { index, count })
    }

    pub fn get_posts(&self, account_id: &AccountId, from_index: u64, limit: u32) -> Vec<Post> {
        assert!(limit <= MAX_PAGE_LIMIT, "Limit exceeds maximum allowed value");
        let Some(posts) = self.posts.get(account_id) else {
            return Vec::new();
        };
        posts
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

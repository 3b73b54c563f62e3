use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

use crate::types::{CollectionId, TokenId};

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum AegisError {
    DuplicateAccount(AccountId),
    UnknownAccount(AccountId),
    CallerNotRegistered(AccountId),
    TargetNotRegistered(AccountId),
    CollectionNotFound(CollectionId),
    CollectionNotOwned {
        collection_id: CollectionId,
        owner_id: AccountId,
    },
    CollectionNotEmpty {
        collection_id: CollectionId,
        total_supply: u64,
    },
    CollectionInUse {
        collection_id: CollectionId,
        account_id: AccountId,
    },
    CollectionRequired,
    CollectionNotAccepted(CollectionId),
    EmptyDisplayName,
    DisplayNameTooLong { max: u32, actual: u64 },
    PostTooLong { max: u32, actual: u64 },
    TooManyAttachments { max: u32, actual: u64 },
    IndexOutOfRange { index: u64, count: u64 },
    BadgeNotFound {
        collection_id: CollectionId,
        token_id: TokenId,
    },
    NotBadgeHolder {
        collection_id: CollectionId,
        token_id: TokenId,
        account_id: AccountId,
    },
    SelfTransfer,
    RequiresOneYocto,
    Unauthorized(String),
    MissingInput,
    InvalidConfig(String),
    InvalidState(String),
}

impl std::fmt::Display for AegisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAccount(id) => write!(f, "User already exists: {}", id),
            Self::UnknownAccount(id) => write!(f, "Account is not registered: {}", id),
            Self::CallerNotRegistered(id) => write!(f, "Caller is not a user: {}", id),
            Self::TargetNotRegistered(id) => write!(f, "User does not exist: {}", id),
            Self::CollectionNotFound(id) => write!(f, "Badge collection not found: {}", id),
            Self::CollectionNotOwned {
                collection_id,
                owner_id,
            } => write!(
                f,
                "Badge collection {} is not owned by Aegis (owner: {})",
                collection_id, owner_id
            ),
            Self::CollectionNotEmpty {
                collection_id,
                total_supply,
            } => write!(
                f,
                "Badge collection {}'s total supply is not zero ({})",
                collection_id, total_supply
            ),
            Self::CollectionInUse {
                collection_id,
                account_id,
            } => write!(
                f,
                "Badge collection {} is already bound to {}",
                collection_id, account_id
            ),
            Self::CollectionRequired => {
                write!(f, "A badge collection must be supplied at registration")
            }
            Self::CollectionNotAccepted(id) => write!(
                f,
                "Badge collections are minted by Aegis, cannot accept collection {}",
                id
            ),
            Self::EmptyDisplayName => write!(f, "Display name must not be empty"),
            Self::DisplayNameTooLong { max, actual } => write!(
                f,
                "Display name is too long: {} bytes (max {})",
                actual, max
            ),
            Self::PostTooLong { max, actual } => {
                write!(f, "Post text is too long: {} bytes (max {})", actual, max)
            }
            Self::TooManyAttachments { max, actual } => {
                write!(f, "Too many attachments: {} (max {})", actual, max)
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "Post index {} out of range (count {})", index, count)
            }
            Self::BadgeNotFound {
                collection_id,
                token_id,
            } => write!(
                f,
                "Badge {} not found in collection {}",
                token_id, collection_id
            ),
            Self::NotBadgeHolder {
                collection_id,
                token_id,
                account_id,
            } => write!(
                f,
                "{} does not hold badge {} of collection {}",
                account_id, token_id, collection_id
            ),
            Self::SelfTransfer => write!(f, "Cannot transfer a badge to its current holder"),
            Self::RequiresOneYocto => {
                write!(f, "Requires attached deposit of exactly 1 yoctoNEAR")
            }
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::MissingInput => write!(f, "No input provided"),
            Self::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

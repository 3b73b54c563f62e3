use near_sdk::{log, AccountId};

use crate::badges::ledger::BadgeLedger;
use crate::errors::AegisError;
use crate::types::{BadgePolicy, CollectionId};

/// Supplies the badge collection of a newly registered account.
///
/// Implementations validate everything before touching the ledger, so a
/// rejected registration leaves no trace.
pub trait BadgeCollectionProvider {
    fn provision(
        &self,
        ledger: &mut BadgeLedger,
        registry_id: &AccountId,
        account_id: &AccountId,
        supplied: Option<CollectionId>,
    ) -> Result<CollectionId, AegisError>;
}

/// Creates a fresh collection owned by the registry.
pub struct MintedCollections;

/// Adopts a caller-supplied collection that the registry already owns.
pub struct ExternalCollections;

impl BadgeCollectionProvider for MintedCollections {
    fn provision(
        &self,
        ledger: &mut BadgeLedger,
        registry_id: &AccountId,
        account_id: &AccountId,
        supplied: Option<CollectionId>,
    ) -> Result<CollectionId, AegisError> {
        if let Some(collection_id) = supplied {
            return Err(AegisError::CollectionNotAccepted(collection_id));
        }
        let collection_id = ledger.insert_collection(registry_id.clone(), Some(account_id.clone()));
        log!("Created badge collection {} for {}", collection_id, account_id);
        Ok(collection_id)
    }
}

impl BadgeCollectionProvider for ExternalCollections {
    fn provision(
        &self,
        ledger: &mut BadgeLedger,
        registry_id: &AccountId,
        account_id: &AccountId,
        supplied: Option<CollectionId>,
    ) -> Result<CollectionId, AegisError> {
        let collection_id = supplied.ok_or(AegisError::CollectionRequired)?;
        let collection = ledger.collection(collection_id)?;

        if &collection.owner_id != registry_id {
            return Err(AegisError::CollectionNotOwned {
                collection_id,
                owner_id: collection.owner_id.clone(),
            });
        }
        if collection.total_supply > 0 {
            return Err(AegisError::CollectionNotEmpty {
                collection_id,
                total_supply: collection.total_supply,
            });
        }
        if let Some(bound_to) = &collection.bound_to {
            return Err(AegisError::CollectionInUse {
                collection_id,
                account_id: bound_to.clone(),
            });
        }

        ledger.bind(collection_id, account_id)?;
        log!("Bound badge collection {} to {}", collection_id, account_id);
        Ok(collection_id)
    }
}

impl BadgePolicy {
    pub fn provider(self) -> &'static dyn BadgeCollectionProvider {
        match self {
            BadgePolicy::Minted => &MintedCollections,
            BadgePolicy::External => &ExternalCollections,
        }
    }
}

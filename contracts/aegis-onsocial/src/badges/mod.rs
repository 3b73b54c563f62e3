mod follow;
pub mod ledger;
pub mod provider;

pub use ledger::BadgeLedger;
pub use provider::{BadgeCollectionProvider, ExternalCollections, MintedCollections};

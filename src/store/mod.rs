// ============================================================================
// Store Layer
// ============================================================================
//
// In-memory record store plus the seed data it is built from.
//
// ============================================================================

mod record_store;
mod seed;

pub use record_store::{RecordStore, StoreTxn};
pub use seed::SeedData;

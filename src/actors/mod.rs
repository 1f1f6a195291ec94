// ============================================================================
// Actors Module
// ============================================================================
//
// Actor front for the directory: one mailbox serialising email changes and
// answering inspection reads.
//
// ============================================================================

mod directory_actor;

pub use directory_actor::{ChangeEmail, DirectoryActor, GetCompany, GetUser, ListUsers};

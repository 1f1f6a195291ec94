// ============================================================================
// Directory Domain - Users, the company aggregate, and email changes
// ============================================================================
//
// - Value objects (UserId, Email, Classification)
// - Records (UserRecord, CompanyAggregate)
// - Events (EmailChanged, ChangeOutcome)
// - Errors (DirectoryError, ErrorKind)
// - Workflow (EmailChangeWorkflow)
//
// ============================================================================

pub mod value_objects;
pub mod records;
pub mod events;
pub mod errors;
pub mod workflow;

// Re-export for convenience
pub use value_objects::*;
pub use records::*;
pub use events::*;
pub use errors::*;
pub use workflow::*;

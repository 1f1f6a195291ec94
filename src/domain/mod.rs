// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain types and the email-change workflow. Storage lives in `store`,
// outbound notifications in `messaging`.
//
// ============================================================================

pub mod directory;

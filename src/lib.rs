// ============================================================================
// Company Directory
// ============================================================================
//
// In-memory user directory with one company aggregate, and the email-change
// workflow that keeps the company's employee count in step with each user's
// classification.
//
// - domain/    - value objects, records, errors, and the workflow
// - store/     - record store and seed data
// - messaging/ - outbound email-changed notifications
// - actors/    - actix front serialising changes through one mailbox
// - metrics/   - prometheus counters
// - config     - driver configuration from the environment
//
// ============================================================================

pub mod actors;
pub mod config;
pub mod domain;
pub mod messaging;
pub mod metrics;
pub mod store;

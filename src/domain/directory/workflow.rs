use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::messaging::EmailNotifier;
use crate::metrics::{outcome, Metrics};
use crate::store::RecordStore;

use super::errors::DirectoryError;
use super::events::{ChangeOutcome, EmailChanged};
use super::value_objects::{Classification, Email, UserId};

// ============================================================================
// Email Change Workflow
// ============================================================================
//
// validate → resolve → short-circuit → reclassify → delta → commit → notify
//
// Input validation is pure and runs before the store is touched. Lookup,
// reclassification and both writes run inside one store transaction.
// Notification happens after the lock is released and never fails the call.
//
// ============================================================================

pub struct EmailChangeWorkflow {
    store: Arc<RecordStore>,
    notifier: Arc<dyn EmailNotifier>,
    metrics: Option<Arc<Metrics>>,
}

impl EmailChangeWorkflow {
    pub fn new(store: Arc<RecordStore>, notifier: Arc<dyn EmailNotifier>) -> Self {
        Self {
            store,
            notifier,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Change the email of `user_id` to `new_email`, reclassifying the user
    /// and adjusting the company's employee count to match.
    pub fn change_email(
        &self,
        user_id: &str,
        new_email: &str,
    ) -> Result<ChangeOutcome, DirectoryError> {
        let started = Instant::now();
        let result = self.commit_change(user_id, new_email);

        if let Ok(ChangeOutcome::Changed(event)) = &result {
            self.notify(event);
        }

        if let Some(metrics) = &self.metrics {
            let label = match &result {
                Ok(ChangeOutcome::Unchanged) => outcome::UNCHANGED,
                Ok(ChangeOutcome::Changed(event)) => {
                    metrics.set_employee_count(event.employee_count);
                    outcome::CHANGED
                }
                Err(_) => outcome::REJECTED,
            };
            metrics.record_email_change(label, started.elapsed().as_secs_f64());
        }

        if let Err(error) = &result {
            tracing::debug!(user_id = %user_id, error = %error, "Email change rejected");
        }

        result
    }

    fn commit_change(
        &self,
        user_id: &str,
        new_email: &str,
    ) -> Result<ChangeOutcome, DirectoryError> {
        if user_id.is_empty() {
            return Err(DirectoryError::InvalidUserId(user_id.to_string()));
        }
        let new_email = Email::parse(new_email)?;
        let user_id = UserId::new(user_id);

        self.store.transaction(|txn| -> Result<ChangeOutcome, DirectoryError> {
            let user = txn
                .get_user(user_id.as_str())
                .ok_or_else(|| DirectoryError::UserNotFound(user_id.clone()))?;

            if user.email() == Some(&new_email) {
                tracing::debug!(user_id = %user_id, "Email unchanged, nothing to do");
                return Ok(ChangeOutcome::Unchanged);
            }

            let company = txn.get_company();
            let old_email = user
                .email()
                .cloned()
                .ok_or_else(|| DirectoryError::inconsistent(&user_id, "stored email is missing"))?;
            let old_domain = old_email.domain().ok_or_else(|| {
                DirectoryError::inconsistent(
                    &user_id,
                    format!("stored email {old_email:?} has no domain"),
                )
            })?;

            let old_classification = user.classification();
            let new_classification = Classification::for_email(&new_email, company.domain());
            let delta = old_classification.employee_delta(new_classification);

            tracing::debug!(
                user_id = %user_id,
                old_domain = %old_domain,
                new_domain = ?new_email.domain(),
                company_domain = %company.domain(),
                from = %old_classification,
                to = %new_classification,
                delta,
                "Reclassified user"
            );

            let updated_company = company.adjusted(delta).ok_or_else(|| {
                DirectoryError::inconsistent(
                    &user_id,
                    format!(
                        "employee count {} cannot absorb delta {delta}",
                        company.employee_count()
                    ),
                )
            })?;
            let employee_count = updated_company.employee_count();

            txn.save_company(updated_company);
            txn.upsert_user(user.with_email(new_email.clone(), new_classification));

            tracing::info!(
                user_id = %user_id,
                new_email = %new_email,
                classification = %new_classification,
                employee_count,
                "Email changed"
            );

            Ok(ChangeOutcome::Changed(EmailChanged {
                event_id: Uuid::new_v4(),
                user_id: user_id.clone(),
                old_email,
                new_email,
                old_classification,
                new_classification,
                employee_delta: delta,
                employee_count,
                occurred_at: Utc::now(),
            }))
        })
    }

    fn notify(&self, event: &EmailChanged) {
        if let Err(error) = self
            .notifier
            .send_email_changed(&event.user_id, &event.new_email)
        {
            tracing::warn!(
                user_id = %event.user_id,
                error = %error,
                "Email changed notification failed; change stays committed"
            );
            if let Some(metrics) = &self.metrics {
                metrics.record_notification_failure();
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use super::domain::{ContactRequest, ContactSubmission, Receipt};
use super::repository::{ContactRequestRepository, RepositoryError, LISTING_LIMIT};
use super::validation::{validate_submission, ValidationError};

/// Validates contact-form submissions and records them in the repository.
pub struct ContactIntakeService<R> {
    repository: Arc<R>,
}

impl<R> ContactIntakeService<R>
where
    R: ContactRequestRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate, stamp and store a submission, returning the receipt for the caller.
    pub fn submit(&self, submission: ContactSubmission) -> Result<Receipt, IntakeError> {
        let valid = validate_submission(submission).inspect_err(|reason| {
            debug!(%reason, "contact submission rejected");
        })?;

        let record = ContactRequest::create(valid, Utc::now());

        match self.repository.insert(&record) {
            Ok(Some(_)) => {
                info!(request_id = %record.id, "contact request stored");
                Ok(Receipt::for_request(record.id))
            }
            Ok(None) => {
                error!(request_id = %record.id, "store acknowledged no inserted document");
                Err(IntakeError::NotAcknowledged)
            }
            Err(err) => {
                error!(error = %err, request_id = %record.id, "failed to store contact request");
                Err(IntakeError::Repository(err))
            }
        }
    }

    /// The most recent requests, newest first, capped at the listing limit.
    pub fn recent_requests(&self) -> Result<Vec<ContactRequest>, IntakeError> {
        self.repository.recent(LISTING_LIMIT).map_err(|err| {
            error!(error = %err, "failed to read contact requests");
            IntakeError::Repository(err)
        })
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("store reported no inserted document")]
    NotAcknowledged,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntakeError {
    /// Caller-side faults are recoverable by fixing the input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, IntakeError::Validation(_))
    }
}

use super::domain::{ContactRequest, RequestId};

/// Most requests the admin listing ever returns.
pub const LISTING_LIMIT: usize = 100;

/// Storage abstraction for the contact-request collection.
///
/// Implementations must be safe to share between concurrent requests.
pub trait ContactRequestRepository: Send + Sync {
    /// Inserts one document. `Ok(None)` means the store accepted the call but reports
    /// nothing inserted.
    fn insert(&self, record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError>;

    /// Up to `limit` records ordered by `created_at`, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<ContactRequest>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("stored document {key} could not be decoded: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Orders records newest first and applies the listing cap.
pub fn newest_first(mut records: Vec<ContactRequest>, limit: usize) -> Vec<ContactRequest> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(limit.min(LISTING_LIMIT));
    records
}

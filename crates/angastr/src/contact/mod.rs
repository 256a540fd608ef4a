//! Contact-form intake: validation, identity assignment, persistence and the admin listing.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{ContactRequest, ContactSubmission, Receipt, RequestId};
pub use repository::{newest_first, ContactRequestRepository, RepositoryError, LISTING_LIMIT};
pub use router::contact_router;
pub use service::{ContactIntakeService, IntakeError};
pub use validation::ValidationError;

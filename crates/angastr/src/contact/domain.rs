use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status assigned to every request at creation.
pub const INITIAL_STATUS: &str = "new";

/// Callback window promised in every receipt.
pub const ESTIMATED_CALLBACK_TIME: &str = "30 минут";

/// Confirmation text returned with a successful submission.
pub const RECEIPT_MESSAGE: &str =
    "Заявка успешно отправлена! Мы свяжемся с вами в ближайшее время.";

/// Identifier wrapper for stored contact requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw contact-form payload as posted by the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "buildingType", alias = "building_type")]
    pub building_type: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Persisted contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: RequestId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub building_type: Option<String>,
    pub area: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ContactRequest {
    /// Stamps a validated submission with a fresh id, the initial status and `created_at`.
    pub(crate) fn create(submission: ValidSubmission, created_at: DateTime<Utc>) -> Self {
        let ContactSubmission {
            name,
            phone,
            email,
            building_type,
            area,
            message,
        } = submission.into_inner();

        Self {
            id: RequestId::generate(),
            name,
            phone,
            email,
            building_type,
            area,
            message,
            status: INITIAL_STATUS.to_string(),
            created_at,
        }
    }
}

/// A submission that has passed every intake rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission(pub(crate) ContactSubmission);

impl ValidSubmission {
    pub fn into_inner(self) -> ContactSubmission {
        self.0
    }
}

/// Acknowledgment returned to the caller once the request is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub success: bool,
    pub message: String,
    pub request_id: RequestId,
    pub estimated_callback_time: String,
}

impl Receipt {
    pub fn for_request(request_id: RequestId) -> Self {
        Self {
            success: true,
            message: RECEIPT_MESSAGE.to_string(),
            request_id,
            estimated_callback_time: ESTIMATED_CALLBACK_TIME.to_string(),
        }
    }
}

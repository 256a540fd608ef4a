use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::contact::domain::{ContactRequest, ContactSubmission, RequestId};
use crate::contact::repository::{newest_first, ContactRequestRepository, RepositoryError};
use crate::contact::{contact_router, ContactIntakeService};

pub(super) fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Иван Петров".to_string(),
        phone: "+7 (918) 633-32-21".to_string(),
        email: Some("ivan.petrov@example.com".to_string()),
        building_type: Some("Складское здание".to_string()),
        area: Some("1500 м²".to_string()),
        message: Some("Нужен склад для логистической компании".to_string()),
    }
}

pub(super) fn minimal_submission(name: &str, phone: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_string(),
        phone: phone.to_string(),
        ..ContactSubmission::default()
    }
}

pub(super) fn stored_request(suffix: &str, created_at: DateTime<Utc>) -> ContactRequest {
    ContactRequest {
        id: RequestId(format!("req-{suffix}")),
        name: "Мария".to_string(),
        phone: "89186333221".to_string(),
        email: None,
        building_type: None,
        area: None,
        message: None,
        status: "new".to_string(),
        created_at,
    }
}

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn seeded_repository(count: usize) -> Arc<MemoryRepository> {
    let repository = Arc::new(MemoryRepository::default());
    for index in 0..count {
        // interleave so insertion order differs from timestamp order
        let offset = if index % 2 == 0 { index } else { count + index };
        let record = stored_request(
            &index.to_string(),
            base_time() + Duration::minutes(offset as i64),
        );
        repository.insert(&record).expect("seed insert");
    }
    repository
}

pub(super) fn build_service() -> (ContactIntakeService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ContactIntakeService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<ContactRequest>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ContactRequestRepository for MemoryRepository {
    fn insert(&self, record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Ok(None);
        }
        guard.push(record.clone());
        Ok(Some(record.id.clone()))
    }

    fn recent(&self, limit: usize) -> Result<Vec<ContactRequest>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(newest_first(guard.clone(), limit))
    }
}

/// Accepts the call but never reports an inserted id.
pub(super) struct SilentRepository;

impl ContactRequestRepository for SilentRepository {
    fn insert(&self, _record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ContactRequest>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub(super) struct UnavailableRepository {
    pub(super) insert_calls: Mutex<usize>,
}

impl UnavailableRepository {
    pub(super) fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().expect("counter mutex poisoned")
    }
}

impl ContactRequestRepository for UnavailableRepository {
    fn insert(&self, _record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError> {
        *self.insert_calls.lock().expect("counter mutex poisoned") += 1;
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ContactRequest>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Stores into memory after holding the calling thread, like a disk sync would.
pub(super) struct SlowRepository {
    pub(super) inner: MemoryRepository,
    pub(super) delay: std::time::Duration,
}

impl ContactRequestRepository for SlowRepository {
    fn insert(&self, record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError> {
        std::thread::sleep(self.delay);
        self.inner.insert(record)
    }

    fn recent(&self, limit: usize) -> Result<Vec<ContactRequest>, RepositoryError> {
        std::thread::sleep(self.delay);
        self.inner.recent(limit)
    }
}

pub(super) struct PanickingRepository;

impl ContactRequestRepository for PanickingRepository {
    fn insert(&self, _record: &ContactRequest) -> Result<Option<RequestId>, RepositoryError> {
        panic!("store driver crashed");
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ContactRequest>, RepositoryError> {
        panic!("store driver crashed");
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn contact_router_with_service(
    service: ContactIntakeService<MemoryRepository>,
) -> axum::Router {
    contact_router(Arc::new(service))
}

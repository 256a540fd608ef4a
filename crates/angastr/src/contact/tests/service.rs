use super::common::*;
use crate::contact::domain::{ESTIMATED_CALLBACK_TIME, INITIAL_STATUS, RECEIPT_MESSAGE};
use crate::contact::repository::{ContactRequestRepository, LISTING_LIMIT};
use crate::contact::{ContactIntakeService, IntakeError, ValidationError};
use chrono::Utc;
use std::sync::Arc;

#[test]
fn submit_stores_record_and_returns_receipt() {
    let (service, repository) = build_service();
    let before = Utc::now();

    let receipt = service.submit(submission()).expect("valid submission");

    assert!(receipt.success);
    assert_eq!(receipt.message, RECEIPT_MESSAGE);
    assert_eq!(receipt.estimated_callback_time, ESTIMATED_CALLBACK_TIME);
    assert_eq!(receipt.request_id.as_str().len(), 36);

    let stored = repository.recent(10).expect("read succeeds");
    assert_eq!(stored.len(), 1);
    let record = &stored[0];
    assert_eq!(record.id, receipt.request_id);
    assert_eq!(record.status, INITIAL_STATUS);
    assert_eq!(record.phone, "+7 (918) 633-32-21");
    assert_eq!(record.building_type.as_deref(), Some("Складское здание"));
    assert!(record.created_at >= before);
}

#[test]
fn identical_submissions_create_distinct_records() {
    let (service, repository) = build_service();

    let first = service.submit(submission()).expect("first submission");
    let second = service.submit(submission()).expect("second submission");

    assert_ne!(first.request_id, second.request_id);
    assert_eq!(repository.len(), 2);
}

#[test]
fn submit_accepts_every_documented_phone_shape() {
    let (service, repository) = build_service();

    for phone in [
        "+7 (918) 633-32-21",
        "+79186333221",
        "89186333221",
        "8 918 633 32 21",
        "+7-918-633-32-21",
    ] {
        let mut raw = minimal_submission("Тест Телефон", phone);
        raw.email = Some("test@example.com".to_string());
        service
            .submit(raw)
            .unwrap_or_else(|err| panic!("{phone} rejected: {err}"));
    }

    assert_eq!(repository.len(), 5);
}

#[test]
fn validation_failures_never_reach_the_store() {
    let repository = Arc::new(UnavailableRepository::default());
    let service = ContactIntakeService::new(repository.clone());

    let cases = [
        (minimal_submission("", "+7 (918) 633-32-21"), ValidationError::Name),
        (minimal_submission("Test", "invalid-phone"), ValidationError::Phone),
        (minimal_submission("Test", "+7 918 633"), ValidationError::Phone),
    ];

    for (raw, expected) in cases {
        match service.submit(raw) {
            Err(IntakeError::Validation(reason)) => assert_eq!(reason, expected),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    assert_eq!(repository.insert_calls(), 0);
}

#[test]
fn omitted_and_empty_email_behave_the_same() {
    let (service, repository) = build_service();

    let omitted = minimal_submission("Анна", "89186333221");
    let mut empty = omitted.clone();
    empty.email = Some(String::new());

    service.submit(omitted).expect("omitted email accepted");
    service.submit(empty).expect("empty email accepted");
    assert_eq!(repository.len(), 2);
}

#[test]
fn submit_maps_missing_acknowledgement_to_persistence_error() {
    let service = ContactIntakeService::new(Arc::new(SilentRepository));

    match service.submit(submission()) {
        Err(IntakeError::NotAcknowledged) => {}
        other => panic!("expected unacknowledged insert, got {other:?}"),
    }
}

#[test]
fn submit_propagates_store_failures() {
    let repository = Arc::new(UnavailableRepository::default());
    let service = ContactIntakeService::new(repository.clone());

    let err = service.submit(submission()).expect_err("store is offline");
    assert!(matches!(err, IntakeError::Repository(_)));
    assert!(!err.is_client_error());
    assert_eq!(repository.insert_calls(), 1);
}

#[test]
fn recent_requests_are_newest_first_and_capped() {
    let repository = seeded_repository(LISTING_LIMIT + 20);
    let service = ContactIntakeService::new(repository);

    let listed = service.recent_requests().expect("listing succeeds");

    assert_eq!(listed.len(), LISTING_LIMIT);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[test]
fn recent_requests_surface_read_failures() {
    let service = ContactIntakeService::new(Arc::new(UnavailableRepository::default()));

    match service.recent_requests() {
        Err(IntakeError::Repository(_)) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
}

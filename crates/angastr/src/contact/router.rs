use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::ContactSubmission;
use super::repository::ContactRequestRepository;
use super::service::ContactIntakeService;

const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";
const LISTING_ERROR_MESSAGE: &str = "Ошибка получения заявок";

/// Router builder exposing the contact form and the admin listing.
pub fn contact_router<R>(service: Arc<ContactIntakeService<R>>) -> Router
where
    R: ContactRequestRepository + 'static,
{
    Router::new()
        .route("/api/contact-form", post(submit_handler::<R>))
        .route("/api/admin/contact-requests", get(list_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ContactIntakeService<R>>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response
where
    R: ContactRequestRepository + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    // the store does synchronous disk io
    let outcome = tokio::task::spawn_blocking(move || service.submit(submission)).await;

    match outcome {
        Ok(Ok(receipt)) => (StatusCode::OK, Json(receipt)).into_response(),
        Ok(Err(err)) if err.is_client_error() => {
            failure(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Ok(Err(_)) => failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE),
        Err(err) => {
            error!(error = %err, "contact submission task failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ContactIntakeService<R>>>,
) -> Response
where
    R: ContactRequestRepository + 'static,
{
    match tokio::task::spawn_blocking(move || service.recent_requests()).await {
        Ok(Ok(requests)) => (StatusCode::OK, Json(requests)).into_response(),
        Ok(Err(_)) => failure(StatusCode::INTERNAL_SERVER_ERROR, LISTING_ERROR_MESSAGE),
        Err(err) => {
            error!(error = %err, "contact listing task failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, LISTING_ERROR_MESSAGE)
        }
    }
}

fn failure(status: StatusCode, message: &str) -> Response {
    let payload = json!({
        "success": false,
        "message": message,
    });
    (status, Json(payload)).into_response()
}

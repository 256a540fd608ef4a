use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::{company_info, projects, services, CompanyInfo, Project, Service};

/// Router builder for the API banner and the static site content.
pub fn catalog_router() -> Router {
    Router::new()
        .route("/api", get(api_banner))
        .route("/api/", get(api_banner))
        .route("/api/company-info", get(company_info_handler))
        .route("/api/services", get(services_handler))
        .route("/api/projects", get(projects_handler))
}

pub(crate) async fn api_banner() -> Json<Value> {
    Json(json!({ "message": "Ангастр API v1.0", "status": "active" }))
}

pub(crate) async fn company_info_handler() -> Json<CompanyInfo> {
    Json(company_info())
}

pub(crate) async fn services_handler() -> Json<&'static [Service]> {
    Json(services())
}

pub(crate) async fn projects_handler() -> Json<&'static [Project]> {
    Json(projects())
}

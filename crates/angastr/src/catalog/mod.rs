//! Read-only site content: company card, service categories and showcase projects.

mod data;
pub mod router;

pub use data::{CompanyInfo, Project, Service};
pub use router::catalog_router;

pub fn company_info() -> CompanyInfo {
    data::COMPANY
}

/// Service categories in display order.
pub fn services() -> &'static [Service] {
    data::SERVICES
}

/// Showcase projects in display order.
pub fn projects() -> &'static [Project] {
    data::PROJECTS
}

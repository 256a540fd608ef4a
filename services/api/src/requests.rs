use crate::infra::SledContactRepository;
use angastr::config::AppConfig;
use angastr::contact::{ContactRequest, ContactRequestRepository, LISTING_LIMIT};
use angastr::error::AppError;
use chrono::Local;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct ListRequestsArgs {
    /// How many requests to print, newest first (at most 100)
    #[arg(long, default_value_t = LISTING_LIMIT)]
    pub(crate) limit: usize,
    /// Print one line per request instead of JSON
    #[arg(long)]
    pub(crate) summary: bool,
}

pub(crate) fn run_list_requests(args: ListRequestsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let repository = SledContactRepository::open(&config.database)?;
    let requests = repository.recent(args.limit.min(LISTING_LIMIT))?;

    if args.summary {
        if requests.is_empty() {
            println!("No contact requests stored.");
        }
        for request in &requests {
            println!("{}", summary_line(request));
        }
    } else {
        let rendered = serde_json::to_string_pretty(&requests).map_err(std::io::Error::from)?;
        println!("{rendered}");
    }

    Ok(())
}

fn summary_line(request: &ContactRequest) -> String {
    let created = request.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    let mut line = format!(
        "{created}  {:<6} {}  {}  {}",
        request.status, request.name, request.phone, request.id
    );
    if let Some(building) = request.building_type.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!("  [{building}]"));
    }
    line
}

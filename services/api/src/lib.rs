mod cli;
mod infra;
mod requests;
mod routes;
mod server;

use angastr::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

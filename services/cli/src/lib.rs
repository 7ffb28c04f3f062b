mod calculate;
mod cli;
mod infra;

use dagpenger::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

use crate::calculate::{run_base_amount, run_calculate, BaseAmountArgs, CalculateArgs};
use clap::{Parser, Subcommand};
use dagpenger::config::AppConfig;
use dagpenger::error::AppError;
use dagpenger::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "dagpenger",
    about = "Assess unemployment benefit (dagpenger) eligibility and daily rate",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess eligibility and daily rate from a person's annual incomes
    Calculate(CalculateArgs),
    /// Show the current base amount (G) and the thresholds derived from it
    BaseAmount(BaseAmountArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Calculate(args) => run_calculate(&config, args).await,
        Command::BaseAmount(args) => run_base_amount(&config, args).await,
    }
}

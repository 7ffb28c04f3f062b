use crate::infra::{parse_base_amount, parse_income, resolve_rules};
use clap::Args;
use dagpenger::config::AppConfig;
use dagpenger::error::AppError;
use dagpenger::{
    Assessment, BaseAmount, BaseAmountRules, BenefitCalculator, BenefitDecision, CaseHandler,
    IncomeImporter, IncomeRecord, IncomeRegister, Specialization,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Annual income as YEAR=AMOUNT; repeat for each year
    #[arg(long = "income", value_parser = parse_income)]
    pub(crate) incomes: Vec<IncomeRecord>,
    /// CSV file with `year,amount` rows, combined with any --income values
    #[arg(long)]
    pub(crate) incomes_csv: Option<PathBuf>,
    /// Use this base amount (G) instead of looking it up
    #[arg(long, value_parser = parse_base_amount, allow_hyphen_values = true)]
    pub(crate) base_amount: Option<BaseAmount>,
    /// Continue with G = 0 when the lookup fails
    #[arg(long)]
    pub(crate) allow_degraded: bool,
    /// Have a caseworker with this specialization review the decision
    #[arg(long)]
    pub(crate) reviewer: Option<Specialization>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BaseAmountArgs {
    /// Use this base amount (G) instead of looking it up
    #[arg(long, value_parser = parse_base_amount, allow_hyphen_values = true)]
    pub(crate) base_amount: Option<BaseAmount>,
    /// Continue with G = 0 when the lookup fails
    #[arg(long)]
    pub(crate) allow_degraded: bool,
}

#[derive(Debug, Serialize)]
struct CalculationReport {
    base_amount: f64,
    degraded: bool,
    incomes: IncomeRegister,
    assessment: Assessment,
    decision: BenefitDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    review: Option<ReviewReport>,
}

#[derive(Debug, Serialize)]
struct ReviewReport {
    reviewer: Specialization,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<BenefitDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refused: Option<String>,
}

pub(crate) async fn run_calculate(
    config: &AppConfig,
    args: CalculateArgs,
) -> Result<(), AppError> {
    let CalculateArgs {
        incomes,
        incomes_csv,
        base_amount,
        allow_degraded,
        reviewer,
        json,
    } = args;

    let mut register = match incomes_csv {
        Some(path) => IncomeImporter::from_path(path)?,
        None => IncomeRegister::new(),
    };
    for record in incomes {
        register.add(record)?;
    }

    let rules = resolve_rules(&config.base_amount, base_amount, allow_degraded).await?;
    let calculator = BenefitCalculator::with_register(rules, register);

    let assessment = calculator.assess()?;
    let decision = BenefitDecision::from_assessment(&assessment);
    let review = reviewer.map(|specialization| {
        match CaseHandler::new(specialization).review(&decision) {
            Ok(reviewed) => ReviewReport {
                reviewer: specialization,
                decision: Some(reviewed),
                refused: None,
            },
            Err(err) => ReviewReport {
                reviewer: specialization,
                decision: None,
                refused: Some(err.to_string()),
            },
        }
    });

    let report = CalculationReport {
        base_amount: rules.base_amount().value(),
        degraded: rules.is_degraded(),
        incomes: calculator.register().clone(),
        assessment,
        decision,
        review,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        render_calculation(&report);
    }

    Ok(())
}

pub(crate) async fn run_base_amount(
    config: &AppConfig,
    args: BaseAmountArgs,
) -> Result<(), AppError> {
    let rules = resolve_rules(&config.base_amount, args.base_amount, args.allow_degraded).await?;
    render_thresholds(&rules);
    Ok(())
}

fn render_calculation(report: &CalculationReport) {
    println!("Dagpenger assessment");
    println!(
        "- Base amount (G): {:.0} NOK{}",
        report.base_amount,
        if report.degraded { " (DEGRADED: lookup failed)" } else { "" }
    );
    println!("Income history (newest first):");
    for record in report.incomes.iter() {
        println!("  - {}: {:.0} NOK", record.year(), record.amount());
    }

    let assessment = &report.assessment;
    println!(
        "- Eligible: {}",
        if assessment.eligible { "yes" } else { "no" }
    );
    if let Some(method) = assessment.method {
        println!(
            "- Method: {} | annual basis {:.0} NOK",
            method.label(),
            assessment.basis
        );
    }
    println!("- Daily rate (dagsats): {:.0} NOK", assessment.daily_rate);
    println!("- Decision: {}", report.decision.summary());

    if let Some(review) = &report.review {
        match (&review.decision, &review.refused) {
            (Some(decision), _) => println!(
                "- Review by {} caseworker: {}",
                review.reviewer,
                decision.summary()
            ),
            (None, Some(reason)) => println!(
                "- Review by {} caseworker refused: {}",
                review.reviewer, reason
            ),
            (None, None) => {}
        }
    }
}

fn render_thresholds(rules: &BaseAmountRules) {
    let base = rules.base_amount();
    println!("Base amount (G)");
    match base.effective_date() {
        Some(date) => println!("- G: {:.0} NOK (effective {})", base.value(), date),
        None => println!("- G: {:.0} NOK", base.value()),
    }
    if rules.is_degraded() {
        println!("- WARNING: lookup failed, every threshold below is zero");
    }
    println!(
        "- 3 G over three years: {:.0} NOK",
        rules.total_over_years(3)
    );
    println!(
        "- 1.5 G minimum for the latest year: {:.0} NOK",
        rules.minimum_annual_income_for_eligibility()
    );
    println!(
        "- 6 G maximum annual basis: {:.0} NOK",
        rules.maximum_annual_benefit_basis()
    );
}

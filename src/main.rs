//! Loan Estimator CLI
//!
//! Command-line interface for the vehicle payment calculator

use anyhow::Context;
use clap::Parser;
use loan_estimator::{
    format::usd,
    loan::{parser, CreditTier, LoanInputs},
    rates::{self, RateTable},
    CalculatorSession,
};

/// Estimate a monthly car payment and what-if alternatives
#[derive(Debug, Parser)]
#[command(name = "loan_estimator", version, about)]
struct Args {
    /// Vehicle price in dollars (overridden by --query when it carries a price)
    #[arg(long)]
    price: Option<f64>,

    /// Down payment in dollars
    #[arg(long, default_value_t = 1_000.0)]
    down_payment: f64,

    /// Trade-in value in dollars
    #[arg(long, default_value_t = 0.0)]
    trade_in: f64,

    /// Finance term in months
    #[arg(long, default_value_t = 60)]
    term: u32,

    /// Credit tier: excellent, good, fair, or poor
    #[arg(long, default_value = "excellent")]
    credit: String,

    /// URL query string to seed the vehicle price from (e.g. "price=25000")
    #[arg(long)]
    query: Option<String>,

    /// CSV rate sheet overriding the standard APR table
    #[arg(long)]
    rate_sheet: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let credit_tier: CreditTier = args.credit.parse()?;

    let vehicle_price = match (&args.price, &args.query) {
        (Some(price), _) => *price,
        (None, Some(query)) => parser::price_from_query(query),
        (None, None) => loan_estimator::loan::DEFAULT_VEHICLE_PRICE,
    };

    let rate_table = match &args.rate_sheet {
        Some(path) => rates::loader::load_rate_table(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("loading rate sheet {}", path.display()))?,
        None => RateTable::standard(),
    };

    let inputs = LoanInputs::new(
        vehicle_price,
        args.down_payment,
        args.trade_in,
        args.term,
        credit_tier,
    )?;
    let session = CalculatorSession::with_rates(inputs, rate_table)?;

    let inputs = session.inputs();
    let estimate = session.estimate();

    println!("Loan Estimator v0.1.0");
    println!("=====================\n");

    println!("Finance Summary Estimate");
    println!("  {:<16} {:>12}", "Vehicle Budget", usd(inputs.vehicle_price));
    println!("  {:<16} {:>12}", "Down Payment", format!("- {}", usd(inputs.down_payment)));
    println!("  {:<16} {:>12}", "Trade-In Value", usd(inputs.trade_in_value));
    println!("  {}", "-".repeat(30));
    println!("  {:<16} {:>12}", "Total Amount", usd(estimate.principal));
    println!();
    println!("  Credit Tier: {}", inputs.credit_tier);
    println!("  APR:         {}%", estimate.apr);
    println!("  Term:        {} months", estimate.term_months);
    println!();
    if estimate.is_fully_covered() {
        println!("  Monthly:     {} /mo (down payment and trade-in cover the price)",
            usd(estimate.monthly_payment));
    } else {
        println!("  Monthly:     {} /mo", usd(estimate.monthly_payment));
    }

    println!("\nWhat-if: Down Payment (term and APR held fixed)");
    println!("  {:>12} {:>10} {:>8}", "Down", "Monthly", "Delta");
    for option in session.what_if_down_payments() {
        if let Some(dp) = option.down_payment {
            println!(
                "  {:>12} {:>10} {:>8}",
                usd(dp),
                usd(option.monthly_payment),
                format_delta(option.payment_delta),
            );
        }
    }

    println!("\nWhat-if: Finance Term (principal and APR held fixed)");
    println!("  {:>12} {:>10} {:>8}", "Term", "Monthly", "Delta");
    for option in session.what_if_terms() {
        if let Some(term) = option.term_months {
            println!(
                "  {:>9} mo {:>10} {:>8}",
                term,
                usd(option.monthly_payment),
                format_delta(option.payment_delta),
            );
        }
    }

    Ok(())
}

/// Signed delta column: "+$25", "-$37", or "--" for the current selection
fn format_delta(delta: f64) -> String {
    if delta == 0.0 {
        "--".to_string()
    } else if delta > 0.0 {
        format!("+{}", usd(delta))
    } else {
        format!("-{}", usd(-delta))
    }
}

//! Command-line currency converter.
//!
//! Usage:
//!   converter convert 100 USD EUR       - Convert an amount
//!   converter add 10 USD 5 EUR          - Arithmetic with money
//!   converter mul 10 USD 3              - Arithmetic with a plain number
//!   converter compare 100 USD 90 EUR    - Compare two money values
//!   converter rates                     - Show the configured rates

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use converter_core::{MoneyService, Operand, Operation, RateTable, ToAmount, rates};
use converter_shared::{AppConfig, logging};

/// Converts and combines money using configured exchange rates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file; defaults to config/default and config/$RUN_MODE
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an amount into another currency
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency
        from: String,
        /// Target currency
        to: String,
    },
    /// Add money or a number to money
    Add(ArithmeticArgs),
    /// Subtract money or a number from money
    Sub(ArithmeticArgs),
    /// Multiply money by money or a number
    Mul(ArithmeticArgs),
    /// Divide money by money or a number
    Div(ArithmeticArgs),
    /// Compare two money values
    Compare {
        /// Left amount
        amount: String,
        /// Left currency
        currency: String,
        /// Right amount
        other_amount: String,
        /// Right currency
        other_currency: String,
    },
    /// Show the base currency and the configured rates
    Rates,
}

#[derive(Args, Debug)]
struct ArithmeticArgs {
    /// Left amount
    amount: String,
    /// Left currency; the result is expressed in it
    currency: String,
    /// Right operand
    operand: String,
    /// Currency of the right operand; a plain number when omitted
    operand_currency: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    logging::init(&config.logging.filter)?;

    let table = RateTable::try_from(&config.rates).context("Invalid rate configuration")?;
    let service = MoneyService::from(rates::install(table));
    info!(
        currencies = service.table().currencies().len(),
        "Rates loaded"
    );

    println!("{}", execute(&service, cli.command)?);
    Ok(())
}

/// Runs one command and returns the text to print.
fn execute(service: &MoneyService, command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::Convert { amount, from, to } => {
            let money = service.money(amount.as_str(), &from)?;
            service.convert(&money, &to)?.to_string()
        }
        Command::Add(args) => arithmetic(service, Operation::Add, &args)?,
        Command::Sub(args) => arithmetic(service, Operation::Subtract, &args)?,
        Command::Mul(args) => arithmetic(service, Operation::Multiply, &args)?,
        Command::Div(args) => arithmetic(service, Operation::Divide, &args)?,
        Command::Compare {
            amount,
            currency,
            other_amount,
            other_currency,
        } => {
            let left = service.money(amount.as_str(), &currency)?;
            let right = service.money(other_amount.as_str(), &other_currency)?;
            match service.compare(&left, &right) {
                Some(Ordering::Less) => format!("{left} < {right}"),
                Some(Ordering::Equal) => format!("{left} = {right}"),
                Some(Ordering::Greater) => format!("{left} > {right}"),
                None => format!("{left} and {right} are incomparable"),
            }
        }
        Command::Rates => rate_listing(service.table()),
    };
    Ok(output)
}

fn arithmetic(
    service: &MoneyService,
    operation: Operation,
    args: &ArithmeticArgs,
) -> anyhow::Result<String> {
    let left = service.money(args.amount.as_str(), &args.currency)?;
    let right = match &args.operand_currency {
        Some(currency) => Operand::Money(service.money(args.operand.as_str(), currency)?),
        None => Operand::Amount(args.operand.to_amount()?),
    };
    let result = service.apply(&left, operation, right)?;
    info!(operation = %operation.symbol(), %left, %result, "Computed");
    Ok(result.to_string())
}

fn rate_listing(table: &RateTable) -> String {
    let Some(base) = table.base_currency() else {
        return "No rates configured".to_string();
    };

    let mut lines = vec![format!("base {base}")];
    lines.extend(
        table
            .currencies()
            .into_iter()
            .filter_map(|code| table.rate(code).map(|rate| format!("{code} {rate}"))),
    );
    lines.join("\n")
}

use std::{error::Error, fs, path::Path, process::exit};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use budgeteur_filters::{
    Expression, count_matches, decode_query, filter_records, from_json, parse_records,
};

/// Print the transactions that match a filter expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON array of transactions.
    #[arg(long)]
    transactions: String,

    /// The filter expression as JSON, e.g. '[{"conditions":[{"field":"text","value":"rent"}]}]'.
    #[arg(long, conflicts_with_all = ["filter_file", "query"])]
    filter: Option<String>,

    /// File path to a JSON filter expression, e.g. one exported from a saved report.
    #[arg(long, conflicts_with = "query")]
    filter_file: Option<String>,

    /// A search URL query string holding the filter in its `filter` parameter.
    #[arg(long)]
    query: Option<String>,

    /// Print the number of matching transactions instead of the transactions.
    #[arg(long)]
    count: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let expression = match load_expression(&args) {
        Ok(expression) => expression,
        Err(error) => {
            tracing::error!("Could not load the filter: {error}");
            exit(1);
        }
    };

    let transactions = match read_file(Path::new(&args.transactions))
        .and_then(|json| parse_records(&json).map_err(Into::into))
    {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Could not load transactions from {}: {error}", args.transactions);
            exit(1);
        }
    };

    tracing::info!(
        "Loaded {} transactions and a filter with {} groups",
        transactions.len(),
        expression.len()
    );

    if args.count {
        println!("{}", count_matches(&expression, &transactions));
    } else {
        let matched = filter_records(&expression, &transactions);
        println!("{}", serde_json::to_string_pretty(&matched)?);
    }

    Ok(())
}

fn load_expression(args: &Args) -> Result<Expression, Box<dyn Error>> {
    if let Some(json) = &args.filter {
        Ok(from_json(json)?)
    } else if let Some(path) = &args.filter_file {
        Ok(from_json(&read_file(Path::new(path))?)?)
    } else if let Some(query) = &args.query {
        Ok(decode_query(query)?)
    } else {
        tracing::info!("No filter given, every transaction will match");
        Ok(Expression::new())
    }
}

fn read_file(path: &Path) -> Result<String, Box<dyn Error>> {
    if !path.is_file() {
        return Err(format!("file does not exist at {path:?}").into());
    }

    Ok(fs::read_to_string(path)?)
}

fn setup_logging() {
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(stderr_log)
        .init();
}

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use open_prices::engine::{
    Dimension, FilterTarget, Observation, Ranking, SalesTable, TopN, compute_sales_metrics,
    make_metrics_table,
};
use open_prices::engine::profile::log_column_summaries;
use open_prices::logging;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "open_prices")]
#[command(about = "Sales metrics report over a price observation dataset", long_about = None)]
struct Args {
    /// JSON array of observations
    data: PathBuf,

    /// Column to rank, e.g. category_tag
    #[arg(short, long, default_value = "category_tag")]
    dimension: Dimension,

    /// Slice column: proof_currency or location_osm_address_country
    #[arg(short, long, default_value = "proof_currency")]
    filter_on: FilterTarget,

    /// Slice value; defaults to the configured preference
    #[arg(short = 'v', long)]
    filter_value: Option<String>,

    /// Year to report; every year when omitted
    #[arg(short, long)]
    year: Option<i32>,

    /// Keep only the top N values
    #[arg(short, long)]
    top: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init()?;

    let raw = fs::read_to_string(&args.data)
        .with_context(|| format!("reading {}", args.data.display()))?;
    let rows: Vec<Observation> = serde_json::from_str(&raw).context("parsing observations")?;
    let table = SalesTable::new(rows);
    info!(target: "open_prices::report", rows = table.len(), "Loaded observations");
    log_column_summaries(&table);

    let filter_value = match args.filter_value {
        Some(value) => value,
        None => match args.filter_on.default_filter(&table) {
            Some((_, value)) => value,
            None => {
                warn!(target: "open_prices::report", filter_on = %args.filter_on, "No values to slice on");
                println!("[]");
                return Ok(());
            }
        },
    };

    let ranking = match args.top {
        Some(n) => TopN::new(n).inspect_err(|e| e.log_error())?.ranking(),
        None => Ranking::All,
    };

    let metrics = compute_sales_metrics(
        &table,
        args.dimension,
        args.filter_on.dimension(),
        &filter_value,
        args.year,
        ranking,
    );
    if metrics.is_empty() {
        warn!(target: "open_prices::report", filter_value = %filter_value, year = ?args.year, "No sales in slice");
    }

    println!("{}", serde_json::to_string_pretty(&make_metrics_table(&metrics))?);
    Ok(())
}

//! Furniture Pricer CLI - headless resale value estimation
//!
//! Trains the price model on the configured dataset, answers one query and
//! prints the estimate, the year-by-year trajectory and the depreciation.
//!
//! # Usage
//! ```sh
//! cargo run --bin estimate -- --purchase-year 2018 --target-year 2026 \
//!     --price 25000 --furniture-type Chair --material Wood --quality High --color Brown
//! ```
//!
//! # Environment Variables
//! - `DATASET_PATH` - CSV dataset (default: data/furniture_price_dataset.csv)
//! - `MODEL_N_TREES`, `MODEL_SEED` - forest size and seed (default: 100, 42)
//! - `CURRENCY_SYMBOL` - display currency (default: ₹)

use anyhow::{Context, Result, bail};
use clap::Parser;
use furniture_pricer::application::bootstrap::EngineBootstrap;
use furniture_pricer::config::{Config, FormEnvConfig};
use furniture_pricer::domain::valuation::query::PredictionQuery;
use furniture_pricer::infrastructure::dataset_loader::ConsistencyPolicy;
use furniture_pricer::interfaces::report::{describe_query_error, render_choices, render_report};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the historical dataset CSV (overrides DATASET_PATH)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Abort if any row's target year != purchase year + condition years
    #[arg(long)]
    reject_inconsistent: bool,

    /// Year the item was bought
    #[arg(long)]
    purchase_year: Option<i32>,

    /// Year to estimate the price for (default: FORM_TARGET_YEAR_DEFAULT)
    #[arg(long)]
    target_year: Option<i32>,

    /// Original purchase price in whole currency units (default: FORM_PRICE_DEFAULT)
    #[arg(long)]
    price: Option<u64>,

    #[arg(long)]
    furniture_type: Option<String>,

    #[arg(long)]
    material: Option<String>,

    #[arg(long)]
    quality: Option<String>,

    #[arg(long)]
    color: Option<String>,

    /// Number of trees in the random forest (overrides MODEL_N_TREES)
    #[arg(long)]
    n_trees: Option<usize>,

    /// Training seed (overrides MODEL_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the accepted purchase years and category labels, then exit
    #[arg(long)]
    list_choices: bool,
}

fn required<T: Clone>(value: &Option<T>, flag: &str) -> Result<T> {
    value
        .clone()
        .with_context(|| format!("--{} is required", flag))
}

/// Builds the query from the flags, checking it against the form bounds.
fn build_query(args: &Args, form: &FormEnvConfig) -> Result<PredictionQuery> {
    let target_year = args.target_year.unwrap_or(form.target_year_default);
    let original_price = args.price.unwrap_or(form.price_default);
    form.check_target_year(target_year)?;
    form.check_price(original_price)?;

    Ok(PredictionQuery {
        purchase_year: required(&args.purchase_year, "purchase-year")?,
        target_year,
        original_price,
        furniture_type: required(&args.furniture_type, "furniture-type")?,
        material: required(&args.material, "material")?,
        quality: required(&args.quality, "quality")?,
        color: required(&args.color, "color")?,
    })
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for the report
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = &args.dataset {
        config.dataset.path = path.clone();
    }
    if args.reject_inconsistent {
        config.dataset.consistency = ConsistencyPolicy::Reject;
    }
    if let Some(n_trees) = args.n_trees {
        if n_trees == 0 {
            bail!("--n-trees must be at least 1");
        }
        config.model.n_trees = n_trees;
    }
    if let Some(seed) = args.seed {
        config.model.seed = seed;
    }

    // Bad flags fail before the forest is trained
    let query = if args.list_choices {
        None
    } else {
        Some(build_query(&args, &config.form)?)
    };

    let engine = EngineBootstrap::init(&config)?;

    let Some(query) = query else {
        print!("{}", render_choices(&engine));
        return Ok(());
    };

    if !engine.purchase_years().contains(&query.purchase_year) {
        info!(
            "Purchase year {} not present in the dataset; the model will extrapolate",
            query.purchase_year
        );
    }

    let report = match engine.estimate(query) {
        Ok(report) => report,
        Err(e) => bail!(describe_query_error(&e)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, &config.form.currency_symbol));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["estimate"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    const FULL: &[&str] = &[
        "--purchase-year",
        "2018",
        "--furniture-type",
        "Chair",
        "--material",
        "Wood",
        "--quality",
        "High",
        "--color",
        "Brown",
    ];

    #[test]
    fn test_build_query_uses_form_defaults() {
        let form = FormEnvConfig::default();
        let query = build_query(&args(FULL), &form).unwrap();
        assert_eq!(query.purchase_year, 2018);
        assert_eq!(query.target_year, form.target_year_default);
        assert_eq!(query.original_price, form.price_default);
        assert_eq!(query.color, "Brown");
    }

    #[test]
    fn test_build_query_rejects_missing_flag() {
        let err = build_query(&args(&["--purchase-year", "2018"]), &FormEnvConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "--furniture-type is required");
    }

    #[test]
    fn test_build_query_rejects_out_of_bounds_values() {
        let form = FormEnvConfig::default();
        let mut argv = FULL.to_vec();
        argv.extend_from_slice(&["--target-year", "2050"]);
        assert!(build_query(&args(&argv), &form).is_err());

        let mut argv = FULL.to_vec();
        argv.extend_from_slice(&["--price", "5"]);
        assert!(build_query(&args(&argv), &form).is_err());
    }
}

//! Plain-text rendering of valuation results for the terminal.

use super::formatting::format_currency;
use crate::application::valuation::DepreciationEngine;
use crate::domain::errors::QueryError;
use crate::domain::valuation::query::{Depreciation, ValuationReport};
use crate::domain::valuation::record::CategoricalAttribute;

pub const INVALID_RANGE_MESSAGE: &str = "Target year must be after purchase year!";

const BAR_WIDTH: f64 = 40.0;

/// User-facing message for a rejected query.
pub fn describe_query_error(err: &QueryError) -> String {
    match err {
        QueryError::InvalidRange { .. } => INVALID_RANGE_MESSAGE.to_string(),
        QueryError::UnknownCategory { attribute, label } => format!(
            "Unknown {} {:?}: choose one of the values present in the dataset",
            attribute, label
        ),
        other => other.to_string(),
    }
}

/// Summary sentence for the depreciation between the first and last prices.
pub fn depreciation_sentence(report: &ValuationReport, symbol: &str) -> String {
    let initial = format_currency(report.trajectory.first().price, symbol);
    let last = format_currency(report.trajectory.last().price, symbol);
    match report.depreciation {
        Depreciation::Percent(pct) => format!(
            "Estimated ML-based depreciation from {} to {} is {}%",
            initial, last, pct
        ),
        Depreciation::NotApplicable => format!(
            "Estimated ML-based depreciation from {} to {} is not applicable",
            initial, last
        ),
    }
}

pub fn render_report(report: &ValuationReport, symbol: &str) -> String {
    let q = &report.query;
    let mut out = format!(
        "{} | {} | {} | {} (bought {} for {})\n",
        q.furniture_type,
        q.material,
        q.quality,
        q.color,
        q.purchase_year,
        format_currency(q.original_price as f64, symbol)
    );
    out.push_str(&format!(
        "Estimated price in {}: {}\n\n",
        q.target_year,
        format_currency(report.point_estimate, symbol)
    ));
    out.push_str("Depreciation over time:\n");

    let max_price = report
        .trajectory
        .points()
        .iter()
        .map(|p| p.price)
        .fold(0.0_f64, f64::max);
    for point in report.trajectory.points() {
        let bar_len = if max_price > 0.0 {
            (point.price.max(0.0) / max_price * BAR_WIDTH).ceil() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:>4}  {:>14}  {}\n",
            point.year,
            format_currency(point.price, symbol),
            "█".repeat(bar_len)
        ));
    }

    out.push('\n');
    out.push_str(&depreciation_sentence(report, symbol));
    out.push('\n');
    out
}

/// Lists the purchase years and category labels the engine accepts.
pub fn render_choices(engine: &DepreciationEngine) -> String {
    let years: Vec<String> = engine
        .purchase_years()
        .iter()
        .map(|y| y.to_string())
        .collect();
    let mut out = format!("Purchase years: {}\n", years.join(", "));
    for attribute in CategoricalAttribute::ALL {
        out.push_str(&format!(
            "{}: {}\n",
            attribute.column_name(),
            engine.labels(attribute).join(", ")
        ));
    }
    out
}

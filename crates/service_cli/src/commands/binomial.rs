//! Binomial command implementation
//!
//! Prices a European option on a binomial lattice.

use pricer_pricing::lattice::BinomialPricer;
use serde::Serialize;
use tracing::info;

use super::{emit, fmt_price, ContractArgs, ContractSummary, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

#[derive(Debug, Serialize)]
struct BinomialReport {
    engine: &'static str,
    #[serde(flatten)]
    contract: ContractSummary,
    steps: usize,
    price: f64,
}

/// Run the binomial command
pub fn run(
    args: &ContractArgs,
    steps: Option<usize>,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let market = args.market(config)?;
    let option = args.option()?;
    let steps = steps.unwrap_or(config.pricing.steps);

    info!("Pricing {} on a {}-step lattice", option.payoff_type(), steps);
    let price = BinomialPricer::new(steps)?.price(&market, &option)?;

    let report = BinomialReport {
        engine: "binomial",
        contract: ContractSummary::new(&market, &option),
        steps,
        price,
    };
    emit(
        format,
        &report.contract,
        &report,
        &[("steps", steps.to_string()), ("price", fmt_price(price))],
    )
}

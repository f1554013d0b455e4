//! Monte Carlo command implementation
//!
//! Prices a European option by naive Monte Carlo and reports the
//! standard error alongside the estimate.

use pricer_core::types::PricingError;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PricingResult};
use serde::Serialize;
use tracing::info;

use super::{emit, fmt_price, ContractArgs, ContractSummary, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Monte Carlo settings after applying flags over config
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulationSettings {
    /// Number of trials
    pub n_paths: usize,
    /// Time intervals
    pub n_steps: usize,
    /// Seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl SimulationSettings {
    /// Flags take precedence over config.
    pub fn resolve(
        n_paths: Option<usize>,
        n_steps: Option<usize>,
        seed: Option<u64>,
        config: &CliConfig,
    ) -> Self {
        Self {
            n_paths: n_paths.unwrap_or(config.pricing.n_paths),
            n_steps: n_steps.unwrap_or(config.pricing.n_steps),
            seed: seed.or(config.pricing.seed),
        }
    }

    /// Builds a pricer for these settings.
    pub fn pricer(&self) -> Result<MonteCarloPricer> {
        let config = MonteCarloConfig::builder()
            .n_paths(self.n_paths)
            .n_steps(self.n_steps)
            .maybe_seed(self.seed)
            .build()
            .map_err(PricingError::from)?;
        Ok(MonteCarloPricer::new(config).map_err(PricingError::from)?)
    }
}

#[derive(Debug, Serialize)]
struct MonteCarloReport {
    engine: &'static str,
    #[serde(flatten)]
    contract: ContractSummary,
    settings: SimulationSettings,
    result: PricingResult,
}

/// Run the monte-carlo command
pub fn run(
    args: &ContractArgs,
    settings: SimulationSettings,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let market = args.market(config)?;
    let option = args.option()?;

    info!(
        "Simulating {} paths ({} steps, seed {:?})",
        settings.n_paths, settings.n_steps, settings.seed
    );
    let result = settings.pricer()?.price_european(&market, &option)?;

    let report = MonteCarloReport {
        engine: "monte-carlo",
        contract: ContractSummary::new(&market, &option),
        settings,
        result,
    };
    emit(
        format,
        &report.contract,
        &report,
        &[
            ("paths", settings.n_paths.to_string()),
            ("price", fmt_price(result.price)),
            ("std error", fmt_price(result.std_error)),
        ],
    )
}

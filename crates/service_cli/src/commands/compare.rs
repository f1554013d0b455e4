//! Compare command implementation
//!
//! Prices the call and put with the lattice, Monte Carlo and the
//! Black-Scholes-Merton formula, and reports put-call parity residuals.

use pricer_core::types::PricingError;
use pricer_models::analytical::{parity_residual, BlackScholes};
use pricer_pricing::lattice::BinomialPricer;
use pricer_pricing::mc::PricingResult;
use serde::Serialize;
use tracing::{info, warn};

use super::monte_carlo::SimulationSettings;
use super::{emit, fmt_price, ContractArgs, ContractSummary, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

#[derive(Debug, Serialize)]
struct EngineQuotes {
    call: f64,
    put: f64,
    parity_residual: f64,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    #[serde(flatten)]
    contract: ContractSummary,
    steps: usize,
    settings: SimulationSettings,
    binomial: EngineQuotes,
    monte_carlo: EngineQuotes,
    /// (call, put)
    monte_carlo_std_error: (f64, f64),
    black_scholes: EngineQuotes,
}

/// Run the compare command
pub fn run(
    args: &ContractArgs,
    steps: Option<usize>,
    settings: SimulationSettings,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let market = args.market(config)?;
    let option = args.option()?;
    let (call, put) = if option.payoff_type().is_call() {
        (option, option.opposite())
    } else {
        (option.opposite(), option)
    };
    let (strike, expiry) = (option.strike(), option.expiry());
    let quotes = |c: f64, p: f64| EngineQuotes {
        call: c,
        put: p,
        parity_residual: parity_residual(c, p, &market, strike, expiry),
    };

    let steps = steps.unwrap_or(config.pricing.steps);
    info!("Lattice with {} steps", steps);
    let lattice = BinomialPricer::new(steps)?;
    let binomial = quotes(lattice.price(&market, &call)?, lattice.price(&market, &put)?);

    info!("Monte Carlo with {} paths", settings.n_paths);
    let mut pricer = settings.pricer()?;
    let mc_call: PricingResult = pricer.price_european(&market, &call)?;
    let mc_put: PricingResult = pricer.price_european(&market, &put)?;
    let monte_carlo = quotes(mc_call.price, mc_put.price);

    let bs = BlackScholes::new(market).map_err(PricingError::from)?;
    let black_scholes = quotes(bs.price(&call), bs.price(&put));

    let tolerance = 4.0 * (mc_call.std_error + mc_put.std_error);
    if monte_carlo.parity_residual.abs() > tolerance {
        warn!(
            "Monte Carlo parity residual {:.6} exceeds {:.6}",
            monte_carlo.parity_residual, tolerance
        );
    }

    let rows = [
        ("binomial call", fmt_price(binomial.call)),
        ("binomial put", fmt_price(binomial.put)),
        ("binomial parity", format!("{:.2e}", binomial.parity_residual)),
        ("monte carlo call", fmt_price(monte_carlo.call)),
        ("monte carlo put", fmt_price(monte_carlo.put)),
        ("monte carlo parity", format!("{:.2e}", monte_carlo.parity_residual)),
        ("black-scholes call", fmt_price(black_scholes.call)),
        ("black-scholes put", fmt_price(black_scholes.put)),
    ];

    let report = CompareReport {
        contract: ContractSummary::new(&market, &option),
        steps,
        settings,
        binomial,
        monte_carlo,
        monte_carlo_std_error: (mc_call.std_error, mc_put.std_error),
        black_scholes,
    };
    emit(format, &report.contract, &report, &rows)
}

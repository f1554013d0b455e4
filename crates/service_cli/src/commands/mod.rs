//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared contract and
//! market flags live here and resolve against [`CliConfig`].

use clap::{Args, ValueEnum};
use pricer_core::types::PricingError;
use pricer_models::instruments::{PayoffType, VanillaOption};
use pricer_models::models::GbmParams;
use serde::Serialize;

use crate::config::CliConfig;
use crate::Result;

pub mod binomial;
pub mod compare;
pub mod monte_carlo;

/// Output format for pricing reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON document on stdout
    Json,
}

/// Contract terms and market overrides shared by every command
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(short = 'T', long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Option type (call, put)
    #[arg(short = 't', long = "option-type", default_value = "call")]
    pub option_type: PayoffType,

    /// Spot price [config: market.spot]
    #[arg(short, long)]
    pub spot: Option<f64>,

    /// Risk-free rate [config: market.rate]
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Volatility [config: market.volatility]
    #[arg(long, visible_alias = "vol")]
    pub volatility: Option<f64>,

    /// Dividend yield [config: market.dividend]
    #[arg(short, long)]
    pub dividend: Option<f64>,
}

impl ContractArgs {
    /// Market parameters with flags taking precedence over config.
    pub fn market(&self, config: &CliConfig) -> Result<GbmParams> {
        let defaults = &config.market;
        Ok(GbmParams::new(
            self.spot.unwrap_or(defaults.spot),
            self.rate.unwrap_or(defaults.rate),
            self.volatility.unwrap_or(defaults.volatility),
            self.dividend.unwrap_or(defaults.dividend),
        )?)
    }

    /// The option described by the flags.
    pub fn option(&self) -> Result<VanillaOption<f64>> {
        VanillaOption::new(self.strike, self.expiry, self.option_type)
            .map_err(|e| PricingError::from(e).into())
    }
}

/// Contract and market echoed back in every report
#[derive(Debug, Clone, Serialize)]
pub struct ContractSummary {
    /// Call or put
    pub option_type: PayoffType,
    /// Strike
    pub strike: f64,
    /// Expiry in years
    pub expiry: f64,
    /// Market parameters used
    pub market: GbmParams,
}

impl ContractSummary {
    /// Summarises the resolved inputs.
    pub fn new(market: &GbmParams, option: &VanillaOption<f64>) -> Self {
        Self {
            option_type: option.payoff_type(),
            strike: option.strike(),
            expiry: option.expiry(),
            market: *market,
        }
    }

    fn print_table(&self) {
        println!(
            "{} K={} T={}  S={} r={} σ={} q={}",
            self.option_type,
            self.strike,
            self.expiry,
            self.market.spot,
            self.market.rate,
            self.market.volatility,
            self.market.dividend
        );
    }
}

/// Writes `report` as JSON, or `rows` as a table under the contract summary.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    summary: &ContractSummary,
    report: &T,
    rows: &[(&str, String)],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            summary.print_table();
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            println!("┌{}┬{}┐", "─".repeat(width + 2), "─".repeat(20));
            for (label, value) in rows {
                println!("│ {:<width$} │ {:>18} │", label, value, width = width);
            }
            println!("└{}┴{}┘", "─".repeat(width + 2), "─".repeat(20));
        }
    }
    Ok(())
}

/// Fixed-precision price formatting for tables.
pub fn fmt_price(value: f64) -> String {
    format!("{:.6}", value)
}

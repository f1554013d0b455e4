//! Pricer CLI - European option pricing from the command line
//!
//! # Commands
//!
//! - `pricer binomial -k 40 --steps 200` - Binomial lattice price
//! - `pricer monte-carlo -k 40 --n-paths 1000000 --seed 42` - Monte Carlo price and standard error
//! - `pricer compare -k 40` - Lattice, Monte Carlo and closed form side by side
//!
//! Market inputs omitted on the command line come from the config file
//! (`pricer.toml` by default) and `PRICER_*` environment variables.
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires `pricer_models` contracts and
//! market data into the `pricer_pricing` engines.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::monte_carlo::SimulationSettings;
use commands::{ContractArgs, OutputFormat};
use config::CliConfig;

/// European option pricer
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price on a binomial lattice
    Binomial {
        #[command(flatten)]
        contract: ContractArgs,

        /// Lattice intervals [config: pricing.steps]
        #[arg(short = 'n', long)]
        steps: Option<usize>,
    },

    /// Price by naive Monte Carlo
    MonteCarlo {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of trials [config: pricing.n_paths]
        #[arg(short = 'p', long)]
        n_paths: Option<usize>,

        /// Time intervals [config: pricing.n_steps]
        #[arg(long)]
        n_steps: Option<usize>,

        /// Random seed [config: pricing.seed]
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare lattice, Monte Carlo and Black-Scholes prices
    Compare {
        #[command(flatten)]
        contract: ContractArgs,

        /// Lattice intervals [config: pricing.steps]
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Number of trials [config: pricing.n_paths]
        #[arg(short = 'p', long)]
        n_paths: Option<usize>,

        /// Time intervals [config: pricing.n_steps]
        #[arg(long)]
        n_steps: Option<usize>,

        /// Random seed [config: pricing.seed]
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Binomial { contract, steps } => {
            commands::binomial::run(&contract, steps, &config, cli.format)
        }
        Commands::MonteCarlo {
            contract,
            n_paths,
            n_steps,
            seed,
        } => {
            let settings = SimulationSettings::resolve(n_paths, n_steps, seed, &config);
            commands::monte_carlo::run(&contract, settings, &config, cli.format)
        }
        Commands::Compare {
            contract,
            steps,
            n_paths,
            n_steps,
            seed,
        } => {
            let settings = SimulationSettings::resolve(n_paths, n_steps, seed, &config);
            commands::compare::run(&contract, steps, settings, &config, cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pricer_models::instruments::PayoffType;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_binomial() {
        let cli = Cli::parse_from([
            "pricer", "binomial", "-k", "40", "-s", "41", "-r", "0.08", "--volatility", "0.3",
            "-n", "2", "-t", "put",
        ]);
        match cli.command {
            Commands::Binomial { contract, steps } => {
                assert_eq!(contract.strike, 40.0);
                assert_eq!(contract.spot, Some(41.0));
                assert_eq!(contract.option_type, PayoffType::Put);
                assert_eq!(contract.dividend, None);
                assert_eq!(steps, Some(2));
            }
            _ => panic!("expected binomial"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_monte_carlo_json() {
        let cli = Cli::parse_from([
            "pricer", "monte-carlo", "-k", "40", "--n-paths", "1000", "--seed", "42", "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::MonteCarlo {
                n_paths, seed, n_steps, ..
            } => {
                assert_eq!(n_paths, Some(1000));
                assert_eq!(seed, Some(42));
                assert_eq!(n_steps, None);
            }
            _ => panic!("expected monte-carlo"),
        }
    }

    #[test]
    fn test_settings_precedence() {
        let mut config = CliConfig::default();
        config.pricing.seed = Some(1);
        config.pricing.n_steps = 4;

        let settings = SimulationSettings::resolve(Some(500), None, None, &config);
        assert_eq!(settings.n_paths, 500);
        assert_eq!(settings.n_steps, 4);
        assert_eq!(settings.seed, Some(1));

        let settings = SimulationSettings::resolve(None, None, Some(9), &config);
        assert_eq!(settings.n_paths, config.pricing.n_paths);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_market_from_flags_and_config() {
        let cli = Cli::parse_from(["pricer", "binomial", "-k", "40", "-s", "41"]);
        let Commands::Binomial { contract, .. } = cli.command else {
            panic!("expected binomial");
        };

        let config = CliConfig::default();
        let market = contract.market(&config).unwrap();
        assert_eq!(market.spot, 41.0);
        assert_eq!(market.rate, config.market.rate);
        assert_eq!(market.volatility, config.market.volatility);
    }

    #[test]
    fn test_invalid_strike_reported() {
        let cli = Cli::parse_from(["pricer", "binomial", "--strike=-40"]);
        let Commands::Binomial { contract, .. } = cli.command else {
            panic!("expected binomial");
        };
        assert!(matches!(contract.option(), Err(CliError::Pricing(_))));
    }
}

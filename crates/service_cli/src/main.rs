//! optvar CLI - 1-day VaR/ES for a European call option.
//!
//! # Commands
//!
//! - `optvar var --history <csv>` - risk metrics from a historical price file
//! - `optvar var --synthetic` - risk metrics from seeded synthetic returns
//!
//! The CLI is a thin I/O wrapper: file loading, logging, and rendering live
//! here; all numerical semantics live in `risk_engine`.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod loader;
mod plot;

pub use error::{CliError, Result};

/// optvar - historical-simulation option risk metrics
#[derive(Parser)]
#[command(name = "optvar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute 1-day VaR and ES for a European call option
    Var {
        /// Path to a historical price CSV (Date,Price header, most recent first)
        #[arg(long, conflicts_with = "synthetic")]
        history: Option<String>,

        /// Draw synthetic normal daily returns instead of reading history
        #[arg(long)]
        synthetic: bool,

        /// Seed for the synthetic return generator
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Current price of the underlying asset (S0)
        #[arg(long, default_value = "5751.13")]
        spot: f64,

        /// Strike price of the option (K)
        #[arg(long, default_value = "5800")]
        strike: f64,

        /// Time to expiration in years (T)
        #[arg(long, default_value = "1.0")]
        expiry: f64,

        /// Risk-free interest rate (r)
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Confidence level for VaR
        #[arg(long, default_value = "0.99")]
        var_level: f64,

        /// Confidence level for ES
        #[arg(long, default_value = "0.975")]
        es_level: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Render a text histogram of the P&L distribution
        #[arg(long)]
        plot: bool,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Var {
            history,
            synthetic,
            seed,
            spot,
            strike,
            expiry,
            rate,
            var_level,
            es_level,
            format,
            plot,
        } => commands::var::run(&commands::var::VarArgs {
            history,
            synthetic,
            seed,
            spot,
            strike,
            expiry,
            rate,
            var_level,
            es_level,
            format,
            plot,
        }),
    }
}

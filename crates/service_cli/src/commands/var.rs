//! Var command implementation
//!
//! Assembles a return source, runs the risk engine façade, and renders the
//! resulting metrics.

use tracing::info;

use risk_engine::facade::calculate_one_day_eu_call_var_es;
use risk_engine::source::{HistoricalReturns, ReturnSource, SyntheticNormalReturns};
use risk_engine::types::{ConfidenceLevels, MarketParams};

use crate::plot::TextHistogram;
use crate::{loader, CliError, Result};

/// Parsed arguments for the var command.
pub struct VarArgs {
    /// Historical price CSV path, mutually exclusive with `synthetic`
    pub history: Option<String>,
    /// Use the synthetic normal return source
    pub synthetic: bool,
    /// Seed for the synthetic source
    pub seed: u64,
    /// Current price of the underlying (S0)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub expiry: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// VaR confidence level
    pub var_level: f64,
    /// ES confidence level
    pub es_level: f64,
    /// Output format (table, json)
    pub format: String,
    /// Render a text histogram of the P&L
    pub plot: bool,
}

/// Run the var command
pub fn run(args: &VarArgs) -> Result<()> {
    let ratios = collect_ratios(args)?;
    info!("loaded {} daily relative prices", ratios.len());

    let market = MarketParams {
        spot: args.spot,
        strike: args.strike,
        expiry: args.expiry,
        rate: args.rate,
    };
    let levels = ConfidenceLevels {
        var: args.var_level,
        es: args.es_level,
    };

    let mut histogram = TextHistogram::new();
    let observer = args.plot.then_some(&mut histogram as &mut dyn risk_engine::PnlObserver);

    let result = calculate_one_day_eu_call_var_es(&market, &levels, &ratios, observer);

    if let Some(message) = &result.error {
        return Err(CliError::Engine(message.clone()));
    }

    if args.plot {
        histogram.print();
    }

    match args.format.as_str() {
        "json" => {
            let rendered = serde_json::to_string_pretty(&serde_json::json!({
                "market": market,
                "levels": levels,
                "var": result.var,
                "es": result.es,
            }))?;
            println!("{}", rendered);
        }
        "table" => {
            println!("Option parameters:");
            println!("  Underlying price (S0): {}", market.spot);
            println!("  Strike price (K):      {}", market.strike);
            println!("  Time to expiry (T):    {} years", market.expiry);
            println!("  Risk-free rate (r):    {}", market.rate);
            println!("  VaR confidence level:  {:.1}%", levels.var * 100.0);
            println!("  ES confidence level:   {:.1}%", levels.es * 100.0);
            println!();
            println!("Results:");
            println!("  1-day VaR: {:.2}", result.var);
            println!("  1-day ES:  {:.2}", result.es);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}

/// Builds the relative-price series from the selected source.
fn collect_ratios(args: &VarArgs) -> Result<Vec<f64>> {
    if args.synthetic {
        let source = SyntheticNormalReturns::with_seed(args.seed);
        info!("drawing synthetic returns, seed {}", source.seed());
        return source
            .relative_prices()
            .map_err(|e| CliError::Engine(e.to_string()));
    }

    let path = args.history.as_deref().ok_or_else(|| {
        CliError::InvalidArgument("either --history <csv> or --synthetic is required".to_string())
    })?;

    let prices = loader::read_price_csv(path)?;
    let source = HistoricalReturns::new(prices).map_err(|e| CliError::Engine(e.to_string()))?;
    source
        .relative_prices()
        .map_err(|e| CliError::Engine(e.to_string()))
}

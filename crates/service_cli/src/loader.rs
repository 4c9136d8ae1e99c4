//! Historical price file loading.
//!
//! Expects a CSV with a header row and the price in the second column
//! (`Date,Price,...`), listed most recent first — the layout of common
//! index-history exports. The returned series is reversed to oldest-first,
//! the order the engine's return sources expect.

use std::path::Path;

use tracing::debug;

use crate::{CliError, Result};

/// Reads raw closing prices from a CSV file, oldest observation first.
pub fn read_price_csv(path: &str) -> Result<Vec<f64>> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut prices = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record.get(1).ok_or_else(|| {
            CliError::InvalidArgument(format!("{}: expected a price in column 2", path))
        })?;
        let price: f64 = field.trim().parse().map_err(|_| {
            CliError::InvalidArgument(format!("{}: unparseable price '{}'", path, field))
        })?;
        prices.push(price);
    }

    // File is most-recent-first; the engine wants oldest-first
    prices.reverse();

    debug!("loaded {} prices from {}", prices.len(), path);
    Ok(prices)
}

//! Text histogram of a P&L distribution.
//!
//! The terminal stand-in for the plotting collaborator: buckets the P&L
//! series into fixed-width bins and renders each as a bar of `#`
//! characters. Purely a visual side effect; it never touches the metrics.

use risk_engine::facade::PnlObserver;

/// Number of histogram bins.
const BINS: usize = 40;

/// Maximum bar width in characters.
const BAR_WIDTH: usize = 50;

/// Histogram renderer implementing [`PnlObserver`].
#[derive(Debug, Default)]
pub struct TextHistogram {
    rendered: Option<String>,
}

impl TextHistogram {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the captured histogram, if a series was observed.
    pub fn print(&self) {
        if let Some(rendered) = &self.rendered {
            println!("{}", rendered);
        }
    }

    fn render(pnl: &[f64]) -> Option<String> {
        if pnl.is_empty() {
            return None;
        }

        let min = pnl.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = pnl.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut counts = [0usize; BINS];
        if max > min {
            let width = (max - min) / BINS as f64;
            for &p in pnl {
                let mut bin = ((p - min) / width) as usize;
                if bin >= BINS {
                    bin = BINS - 1;
                }
                counts[bin] += 1;
            }
        } else {
            // Degenerate distribution: everything in one bucket
            counts[0] = pnl.len();
        }

        let peak = counts.iter().copied().max().unwrap_or(1).max(1);
        let width = (max - min) / BINS as f64;

        let mut out = String::from("P&L distribution\n");
        for (i, &count) in counts.iter().enumerate() {
            let lo = min + i as f64 * width;
            let bar_len = count * BAR_WIDTH / peak;
            out.push_str(&format!(
                "{:>12.4} | {:<width$} {}\n",
                lo,
                "#".repeat(bar_len),
                count,
                width = BAR_WIDTH
            ));
        }
        Some(out)
    }
}

impl PnlObserver for TextHistogram {
    fn observe(&mut self, pnl: &[f64]) {
        self.rendered = Self::render(pnl);
    }
}

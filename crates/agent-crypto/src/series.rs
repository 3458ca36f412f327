//! Synthetic price series generator
//!
//! Produces a seeded Gaussian random walk for a symbol. Every call builds its
//! own generator from [`SEED`], so the output depends on the symbol alone and
//! all symbols share the same underlying deviates (only scale and offset
//! differ).

use crate::symbol::{SeriesParams, Symbol};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use tracing::debug;

/// Number of daily points in every series
pub const SERIES_LEN: usize = 100;

/// Fixed seed of the random walk
pub const SEED: u64 = 42;

/// Date of the first point
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// One day of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// A generated series together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub params: SeriesParams,
    pub points: Vec<PricePoint>,
}

/// Headline numbers of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    /// Percentage change from first to last price
    pub change_pct: f64,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// `None` for an empty series
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        let (min, max) = self
            .prices()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            });

        Some(SeriesSummary {
            start_date: first.date,
            end_date: last.date,
            first: first.price,
            last: last.price,
            min,
            max,
            change_pct: (last.price - first.price) / first.price * 100.0,
        })
    }
}

/// Generate the simulated daily series for `symbol`.
///
/// Any input is accepted. Lookup ignores case but not whitespace; unknown
/// or empty symbols use the default parameters. Prices are
/// `base_price + cumsum(N(0, volatility))`, clamped to at least
/// [`SeriesParams::floor`]. The clamp applies to each output value only;
/// the walk itself continues unclamped.
pub fn generate(symbol: &str) -> PriceSeries {
    let symbol = Symbol::new(symbol);
    let params = SeriesParams::for_symbol(&symbol);
    let floor = params.floor();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut level = params.base_price;

    let points: Vec<PricePoint> = EPOCH
        .iter_days()
        .take(SERIES_LEN)
        .map(|date| {
            let deviate: f64 = rng.sample(StandardNormal);
            level += deviate * params.volatility;
            PricePoint {
                date,
                price: level.max(floor),
            }
        })
        .collect();

    debug!(
        symbol = %symbol,
        base_price = params.base_price,
        volatility = params.volatility,
        points = points.len(),
        "Generated simulated series"
    );

    PriceSeries {
        symbol,
        params,
        points,
    }
}

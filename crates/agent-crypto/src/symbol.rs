//! Ticker symbols and the per-symbol random-walk parameters

use serde::Serialize;
use std::fmt;

/// Ticker symbol, upper-cased but otherwise as typed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Upper-case raw user input. Never fails; surrounding whitespace is
    /// kept, so `" btc"` is not a known symbol.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Base price and daily volatility driving a simulated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesParams {
    /// Starting level of the walk, in USD
    pub base_price: f64,
    /// Standard deviation of each daily step, in USD
    pub volatility: f64,
}

/// Fraction of the base price below which prices are clamped
pub const FLOOR_RATIO: f64 = 0.1;

const KNOWN_SYMBOLS: [(&str, SeriesParams); 3] = [
    ("BTC", SeriesParams::new(40_000.0, 500.0)),
    ("ETH", SeriesParams::new(2_500.0, 100.0)),
    ("XRP", SeriesParams::new(0.5, 0.05)),
];

impl SeriesParams {
    /// Parameters for symbols outside the known table
    pub const DEFAULT: SeriesParams = SeriesParams::new(100.0, 10.0);

    pub const fn new(base_price: f64, volatility: f64) -> Self {
        Self {
            base_price,
            volatility,
        }
    }

    /// Look up the parameters for `symbol`, falling back to [`SeriesParams::DEFAULT`]
    pub fn for_symbol(symbol: &Symbol) -> Self {
        KNOWN_SYMBOLS
            .iter()
            .find(|(known, _)| *known == symbol.as_str())
            .map_or(Self::DEFAULT, |(_, params)| *params)
    }

    /// Lowest price the series may show
    pub fn floor(&self) -> f64 {
        self.base_price * FLOOR_RATIO
    }
}

/// Symbols with their own parameters, in table order
pub fn known_symbols() -> impl Iterator<Item = &'static str> {
    KNOWN_SYMBOLS.iter().map(|(symbol, _)| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalization() {
        assert_eq!(Symbol::new("btc").as_str(), "BTC");
        assert_eq!(Symbol::new("Eth").to_string(), "ETH");
        assert_eq!(Symbol::new(" btc").as_str(), " BTC");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let btc = SeriesParams::new(40_000.0, 500.0);
        for raw in ["btc", "BTC", "Btc"] {
            assert_eq!(SeriesParams::for_symbol(&Symbol::new(raw)), btc);
        }
    }

    #[test]
    fn test_known_table() {
        assert_eq!(
            SeriesParams::for_symbol(&"eth".into()),
            SeriesParams::new(2_500.0, 100.0)
        );
        assert_eq!(
            SeriesParams::for_symbol(&"xrp".into()),
            SeriesParams::new(0.5, 0.05)
        );
        assert_eq!(known_symbols().collect::<Vec<_>>(), ["BTC", "ETH", "XRP"]);
    }

    #[test]
    fn test_unknown_symbol_uses_default() {
        let doge = SeriesParams::for_symbol(&"DOGE".into());
        assert_eq!(doge, SeriesParams::DEFAULT);
        assert_eq!(doge.base_price, 100.0);
        assert_eq!(doge.volatility, 10.0);

        assert_eq!(SeriesParams::for_symbol(&"".into()), SeriesParams::DEFAULT);
    }

    #[test]
    fn test_padded_symbol_is_not_known() {
        for raw in [" btc", "BTC ", " eth "] {
            assert_eq!(SeriesParams::for_symbol(&raw.into()), SeriesParams::DEFAULT, "{raw:?}");
        }
    }

    #[test]
    fn test_floor() {
        assert!((SeriesParams::new(40_000.0, 500.0).floor() - 4_000.0).abs() < 1e-9);
        assert!((SeriesParams::new(0.5, 0.05).floor() - 0.05).abs() < 1e-12);
    }
}

//! Simulated trends example
//!
//! Prints the simulated price chart for the given symbols (all known symbols
//! by default) without calling any model, so no API key is needed.
//!
//! ```bash
//! cargo run -p agent-crypto --example simulated_trends BTC ETH DOGE
//! ```

use agent_crypto::{SeriesParams, Symbol, TerminalOptions, TerminalSurface, TrendChart};
use agent_crypto::display::DisplaySurface;
use std::env;

fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing();

    let mut symbols: Vec<String> = env::args().skip(1).collect();
    if symbols.is_empty() {
        symbols.extend(agent_crypto::symbol::known_symbols().map(str::to_string));
    }

    let mut surface = TerminalSurface::stdout(TerminalOptions::default());

    for raw in &symbols {
        let symbol = Symbol::new(raw);
        let params = SeriesParams::for_symbol(&symbol);
        println!(
            "{symbol}: base {} volatility {} floor {}",
            params.base_price,
            params.volatility,
            params.floor()
        );

        let chart = TrendChart::new(agent_crypto::generate(symbol.as_str()));
        surface.render_chart(&chart)?;
    }

    Ok(())
}

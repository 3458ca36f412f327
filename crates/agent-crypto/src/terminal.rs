//! Terminal display surface
//!
//! Renders statuses and answers as plain lines and charts as a sparkline,
//! a summary line and a sampled `Date | Price (USD)` table. The Vega-Lite
//! document can be printed as well for use in an interactive viewer.

use crate::chart::TrendChart;
use crate::display::{DisplaySurface, Status};
use crate::error::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

const SPARK_TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Options for [`TerminalSurface`]
#[derive(Debug, Clone, Copy)]
pub struct TerminalOptions {
    /// Show every n-th row in the price table (the last row is always shown)
    pub table_stride: usize,
    /// Maximum sparkline width in characters
    pub sparkline_width: usize,
    /// Also print the chart as Vega-Lite JSON
    pub vega: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            table_stride: 10,
            sparkline_width: 50,
            vega: false,
        }
    }
}

/// Display surface writing to any [`Write`] (stdout in the binary)
pub struct TerminalSurface<W: Write> {
    out: W,
    options: TerminalOptions,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout(options: TerminalOptions) -> Self {
        Self::new(std::io::stdout(), options)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, options: TerminalOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn price_table(&self, chart: &TrendChart) -> Table {
        let points = &chart.series.points;
        let stride = self.options.table_stride.max(1);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec![chart.x_title, chart.y_title]);

        for (i, point) in points.iter().enumerate() {
            if i % stride == 0 || i + 1 == points.len() {
                table.add_row(vec![
                    Cell::new(point.date.format("%Y-%m-%d")),
                    Cell::new(format_price(point.price)).set_alignment(CellAlignment::Right),
                ]);
            }
        }

        table
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn show_status(&mut self, status: Status) -> Result<()> {
        if status != Status::Idle {
            writeln!(self.out, "{status}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn render_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}\n")?;
        Ok(())
    }

    fn render_chart(&mut self, chart: &TrendChart) -> Result<()> {
        writeln!(self.out, "\n{}", chart.title)?;
        writeln!(self.out, "{}", "=".repeat(chart.title.chars().count()))?;

        let prices: Vec<f64> = chart.series.prices().collect();
        writeln!(self.out, "{}", sparkline(&prices, self.options.sparkline_width))?;

        if let Some(summary) = chart.series.summary() {
            writeln!(
                self.out,
                "{} → {}  first {}  last {}  low {}  high {}  change {:+.2}%",
                summary.start_date,
                summary.end_date,
                format_price(summary.first),
                format_price(summary.last),
                format_price(summary.min),
                format_price(summary.max),
                summary.change_pct,
            )?;
        }

        writeln!(self.out, "{}", self.price_table(chart))?;

        if self.options.vega {
            let spec = serde_json::to_string_pretty(&chart.to_vega_lite())?;
            writeln!(self.out, "{spec}")?;
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Two decimals for prices of a dollar or more, four below
pub fn format_price(price: f64) -> String {
    if price.abs() >= 1.0 {
        format!("{price:.2}")
    } else {
        format!("{price:.4}")
    }
}

/// Unicode sparkline of `values`, resampled to at most `width` characters
pub fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let width = width.min(values.len());
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = hi - lo;
    let top = (SPARK_TICKS.len() - 1) as f64;

    (0..width)
        .map(|i| {
            let v = values[i * values.len() / width];
            let level = if range > 0.0 {
                ((v - lo) / range * top).round() as usize
            } else {
                0
            };
            SPARK_TICKS[level.min(SPARK_TICKS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::generate;

    fn render(options: TerminalOptions, f: impl FnOnce(&mut TerminalSurface<Vec<u8>>)) -> String {
        let mut surface = TerminalSurface::new(Vec::new(), options);
        f(&mut surface);
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(40_123.456), "40123.46");
        assert_eq!(format_price(0.51234), "0.5123");
    }

    #[test]
    fn test_sparkline() {
        assert_eq!(sparkline(&[1.0, 2.0, 3.0], 10), "▁▅█");
        assert_eq!(sparkline(&[5.0, 5.0], 10), "▁▁");
        assert_eq!(sparkline(&[], 10), "");
        assert_eq!(sparkline(&[1.0; 100], 20).chars().count(), 20);
    }

    #[test]
    fn test_idle_prints_nothing() {
        let out = render(TerminalOptions::default(), |s| {
            s.show_status(Status::Idle).unwrap();
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_status_and_text() {
        let out = render(TerminalOptions::default(), |s| {
            s.show_status(Status::success("Here is the information:")).unwrap();
            s.render_text("Bitcoin is a cryptocurrency.").unwrap();
        });
        assert_eq!(out, "✅ Here is the information:\nBitcoin is a cryptocurrency.\n\n");
    }

    #[test]
    fn test_chart_table_sampling() {
        let chart = TrendChart::new(generate("BTC"));
        let out = render(TerminalOptions::default(), |s| s.render_chart(&chart).unwrap());

        assert!(out.contains("BTC Price Trends"));
        assert!(out.contains("Price (USD)"));
        assert!(out.contains("2024-01-01"));
        assert!(out.contains("2024-01-11"));
        assert!(out.contains("2024-04-09"));
        assert!(!out.contains("2024-01-02"));
        assert!(!out.contains("\"$schema\""));
    }

    #[test]
    fn test_chart_with_vega() {
        let chart = TrendChart::new(generate("ETH"));
        let options = TerminalOptions {
            vega: true,
            ..TerminalOptions::default()
        };
        let out = render(options, |s| s.render_chart(&chart).unwrap());
        assert!(out.contains("\"$schema\""));
        assert!(out.contains("\"temporal\""));
    }
}

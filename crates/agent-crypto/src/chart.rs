//! Chart model for a price series
//!
//! A [`TrendChart`] carries everything a display surface needs to draw the
//! line chart: title, axis titles and the data table. It can also be exported
//! as a Vega-Lite document for viewers that support hover tooltips.

use crate::series::PriceSeries;
use serde_json::{Value, json};

/// Title of the x axis
pub const X_AXIS_TITLE: &str = "Date";
/// Title of the y axis
pub const Y_AXIS_TITLE: &str = "Price (USD)";

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// An interactive line chart of one simulated series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub series: PriceSeries,
}

impl TrendChart {
    /// Chart titled `"<SYMBOL> Price Trends"`
    pub fn new(series: PriceSeries) -> Self {
        Self {
            title: format!("{} Price Trends", series.symbol),
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            series,
        }
    }

    /// Vega-Lite v5 spec: line with point markers, temporal `Date` x axis,
    /// quantitative `Price` y axis, tooltips and pan/zoom.
    pub fn to_vega_lite(&self) -> Value {
        let values: Vec<Value> = self
            .series
            .points
            .iter()
            .map(|p| {
                json!({
                    "Date": p.date.format("%Y-%m-%d").to_string(),
                    "Price": p.price,
                })
            })
            .collect();

        json!({
            "$schema": VEGA_LITE_SCHEMA,
            "title": self.title,
            "width": "container",
            "data": { "values": values },
            "mark": { "type": "line", "point": true },
            "encoding": {
                "x": { "field": "Date", "type": "temporal", "title": self.x_title },
                "y": { "field": "Price", "type": "quantitative", "title": self.y_title },
                "tooltip": [
                    { "field": "Date", "type": "temporal" },
                    { "field": "Price", "type": "quantitative" }
                ]
            },
            "params": [
                { "name": "zoom", "select": "interval", "bind": "scales" }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{SERIES_LEN, generate};

    #[test]
    fn test_title_uses_uppercased_symbol() {
        let chart = TrendChart::new(generate("eth"));
        assert_eq!(chart.title, "ETH Price Trends");
        assert_eq!(chart.x_title, "Date");
        assert_eq!(chart.y_title, "Price (USD)");
    }

    #[test]
    fn test_vega_lite_encoding() {
        let spec = TrendChart::new(generate("BTC")).to_vega_lite();

        assert_eq!(spec["title"], "BTC Price Trends");
        assert_eq!(spec["mark"]["type"], "line");
        assert_eq!(spec["mark"]["point"], true);
        assert_eq!(spec["encoding"]["x"]["type"], "temporal");
        assert_eq!(spec["encoding"]["x"]["title"], "Date");
        assert_eq!(spec["encoding"]["y"]["type"], "quantitative");
        assert_eq!(spec["encoding"]["y"]["title"], "Price (USD)");
        assert_eq!(spec["encoding"]["tooltip"].as_array().map(Vec::len), Some(2));
        assert_eq!(spec["params"][0]["bind"], "scales");
    }

    #[test]
    fn test_vega_lite_data() {
        let chart = TrendChart::new(generate("XRP"));
        let spec = chart.to_vega_lite();
        let values = spec["data"]["values"].as_array().unwrap();

        assert_eq!(values.len(), SERIES_LEN);
        assert_eq!(values[0]["Date"], "2024-01-01");
        assert_eq!(values[SERIES_LEN - 1]["Date"], "2024-04-09");
        assert_eq!(values[0]["Price"].as_f64(), Some(chart.series.points[0].price));
    }
}

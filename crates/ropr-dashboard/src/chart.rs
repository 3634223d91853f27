//! Grouped bar chart description.
//!
//! One category ("Unprotected Revenue") with two bars side by side: the
//! revenue at risk in the warning color and the avoided loss in the success
//! color. The description is renderer-agnostic; the terminal front end draws
//! it with block characters and the HTTP front end ships it as JSON.

use serde::{Deserialize, Serialize};

use ropr_core::RiskModelOutputs;

/// Chart title.
pub const CHART_TITLE: &str = "Impact of Cybersecurity & BC/DR Investments";
/// Y axis title.
pub const Y_AXIS_TITLE: &str = "Revenue ($)";
/// The single x-axis category.
pub const CATEGORY: &str = "Unprotected Revenue";
/// Name of the revenue-at-risk series.
pub const RISK_EXPOSURE_SERIES: &str = "Risk Exposure";
/// Name of the avoided-loss series.
pub const AVOIDED_LOSS_SERIES: &str = "Avoided Loss";
/// Chart height in pixels.
pub const CHART_HEIGHT: u32 = 500;

/// How multiple series share a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Bars side by side.
    Group,
    /// Bars stacked.
    Stack,
}

/// Bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    /// Warning color.
    Red,
    /// Success color.
    Green,
}

impl SeriesColor {
    /// CSS color name.
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesColor::Red => "red",
            SeriesColor::Green => "green",
        }
    }
}

/// One bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Legend name.
    pub name: String,
    /// Category of each bar.
    pub x: Vec<String>,
    /// Height of each bar.
    pub y: Vec<f64>,
    /// Bar color.
    pub color: SeriesColor,
}

impl BarSeries {
    fn single(name: &str, value: f64, color: SeriesColor) -> Self {
        Self {
            name: name.to_string(),
            x: vec![CATEGORY.to_string()],
            y: vec![value],
            color,
        }
    }
}

/// Chart with several series over shared categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarChart {
    /// Chart title.
    pub title: String,
    /// Y axis title.
    pub y_axis_title: String,
    /// Bar layout.
    pub bar_mode: BarMode,
    /// Height in pixels.
    pub height: u32,
    /// Series in legend order.
    pub series: Vec<BarSeries>,
}

impl GroupedBarChart {
    /// Builds the exposure vs. avoided loss chart.
    pub fn from_outputs(outputs: &RiskModelOutputs) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            y_axis_title: Y_AXIS_TITLE.to_string(),
            bar_mode: BarMode::Group,
            height: CHART_HEIGHT,
            series: vec![
                BarSeries::single(RISK_EXPOSURE_SERIES, outputs.revenue_at_risk, SeriesColor::Red),
                BarSeries::single(AVOIDED_LOSS_SERIES, outputs.avoided_loss, SeriesColor::Green),
            ],
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.series.iter().flat_map(|s| s.x.iter()) {
            if !seen.contains(&category.as_str()) {
                seen.push(category);
            }
        }
        seen
    }

    /// Largest bar, or 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.y.iter().copied())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropr_core::{compute, RiskModelInputs};

    fn chart() -> GroupedBarChart {
        let inputs = RiskModelInputs::new(100_000_000.0)
            .with_cyber_investment(1_000_000.0)
            .with_bcdr_investment(500_000.0)
            .with_risk_exposure_percent(40.0)
            .with_risk_mitigation_effectiveness(75.0);
        GroupedBarChart::from_outputs(&compute(inputs))
    }

    #[test]
    fn test_series_layout() {
        let chart = chart();

        assert_eq!(chart.bar_mode, BarMode::Group);
        assert_eq!(chart.height, 500);
        assert_eq!(chart.series.len(), 2);

        assert_eq!(chart.series[0].name, "Risk Exposure");
        assert_eq!(chart.series[0].color, SeriesColor::Red);
        assert_eq!(chart.series[0].y, vec![40_000_000.0]);

        assert_eq!(chart.series[1].name, "Avoided Loss");
        assert_eq!(chart.series[1].color, SeriesColor::Green);
        assert_eq!(chart.series[1].y, vec![30_000_000.0]);
    }

    #[test]
    fn test_single_category() {
        assert_eq!(chart().categories(), vec!["Unprotected Revenue"]);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(chart().max_value(), 40_000_000.0);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(chart()).unwrap();
        assert_eq!(json["bar_mode"], "group");
        assert_eq!(json["series"][0]["color"], "red");
        assert_eq!(json["series"][1]["x"][0], "Unprotected Revenue");
    }
}

//! Dashboard view model.

use serde::Serialize;

use ropr_core::{compute, RiskModelInputs, RiskModelOutputs};

use crate::chart::GroupedBarChart;
use crate::controls::{Controls, CONTROLS_HEADER};
use crate::format::{format_currency, format_multiple};

/// Page title.
pub const PAGE_TITLE: &str = "Revenue-at-Risk Simulator";
/// Header above the metrics.
pub const RESULTS_HEADER: &str = "Results Summary";

/// How a metric value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Whole currency units.
    Currency,
    /// Ratio shown as a multiple.
    Multiple,
}

/// A labeled headline number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Label.
    pub label: String,
    /// Unrounded value.
    pub value: f64,
    /// Formatted value.
    pub display: String,
    /// Display style.
    pub kind: MetricKind,
}

impl Metric {
    /// Currency metric.
    pub fn currency(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            display: format_currency(value),
            kind: MetricKind::Currency,
        }
    }

    /// Multiple metric.
    pub fn multiple(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            display: format_multiple(value),
            kind: MetricKind::Multiple,
        }
    }
}

/// "How It Works" section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// Section heading.
    pub heading: String,
    /// Bullets as (term, definition).
    pub bullets: Vec<(String, String)>,
}

impl Default for Explanation {
    fn default() -> Self {
        let bullets = [
            (
                "Revenue at Risk",
                "the portion of total revenue potentially lost in the event of \
                 cyberattacks or business interruptions.",
            ),
            (
                "Avoided Loss",
                "how much of that risk is mitigated by your cybersecurity and BC/DR investments.",
            ),
            (
                "ROPR",
                "(Return on Risk Prevention) the financial value of those investments.",
            ),
        ];
        Self {
            heading: "How It Works".to_string(),
            bullets: bullets
                .into_iter()
                .map(|(term, text)| (term.to_string(), text.to_string()))
                .collect(),
        }
    }
}

/// Everything a front end needs to draw one frame of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Page title.
    pub title: String,
    /// Header above the controls.
    pub controls_header: String,
    /// Control values after clamping.
    pub controls: Controls,
    /// Model inputs derived from the controls.
    pub inputs: RiskModelInputs,
    /// Model outputs.
    pub outputs: RiskModelOutputs,
    /// Header above the metrics.
    pub results_header: String,
    /// Revenue at risk, avoided loss, ROPR.
    pub metrics: Vec<Metric>,
    /// Exposure vs. avoided loss chart.
    pub chart: GroupedBarChart,
    /// Explanation text.
    pub explanation: Explanation,
}

impl Dashboard {
    /// Clamps the controls, runs the model and lays out the view.
    pub fn build(controls: &Controls) -> Self {
        let controls = controls.clamped();
        Self::from_inputs(controls, controls.to_inputs())
    }

    fn from_inputs(controls: Controls, inputs: RiskModelInputs) -> Self {
        let outputs = compute(inputs);

        Self {
            title: PAGE_TITLE.to_string(),
            controls_header: CONTROLS_HEADER.to_string(),
            controls,
            inputs,
            outputs,
            results_header: RESULTS_HEADER.to_string(),
            metrics: metrics_for(&outputs),
            chart: GroupedBarChart::from_outputs(&outputs),
            explanation: Explanation::default(),
        }
    }
}

/// The three headline metrics for a set of outputs.
pub fn metrics_for(outputs: &RiskModelOutputs) -> Vec<Metric> {
    vec![
        Metric::currency("Revenue at Risk", outputs.revenue_at_risk),
        Metric::currency("Avoided Revenue Loss", outputs.avoided_loss),
        Metric::multiple(
            "ROPR (Return on Risk Prevention)",
            outputs.return_on_risk_prevention,
        ),
    ]
}

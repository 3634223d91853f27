//! Terminal rendering of the dashboard.

use std::fmt::Write as _;

use colored::Colorize;

use ropr_dashboard::chart::{GroupedBarChart, SeriesColor};
use ropr_dashboard::{format_currency, ControlId, Dashboard};

use crate::output::{header, table_string, KeyValue};

const BAR: char = '█';

/// Draws a [`Dashboard`] as plain or colored text.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width of the longest bar, in characters.
    pub width: usize,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl TextRenderer {
    /// Creates a renderer.
    pub fn new(width: usize, color: bool) -> Self {
        Self { width, color }
    }

    /// Full frame: inputs, metrics, chart and explanation.
    pub fn render(&self, dashboard: &Dashboard) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.heading(&dashboard.title));
        let _ = writeln!(out, "{}", self.heading(&dashboard.controls_header));
        let _ = writeln!(out, "{}", table_string(&control_rows(dashboard)));
        let _ = writeln!(out, "{}", self.heading(&dashboard.results_header));
        let _ = writeln!(out, "{}", table_string(&metric_rows(dashboard)));
        let _ = writeln!(out, "{}", self.heading(&dashboard.chart.title));
        out.push_str(&self.render_chart(&dashboard.chart));
        let _ = writeln!(out, "{}", self.heading(&dashboard.explanation.heading));
        for (term, text) in &dashboard.explanation.bullets {
            let term = if self.color {
                term.bold().to_string()
            } else {
                term.clone()
            };
            let _ = writeln!(out, "  - {} is {}", term, text);
        }
        out
    }

    /// Horizontal grouped bars, one group per category.
    pub fn render_chart(&self, chart: &GroupedBarChart) -> String {
        let mut out = String::new();
        let max = chart.max_value();
        let label_width = chart
            .series
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        for category in chart.categories() {
            let _ = writeln!(out, "{}", category);
            for series in &chart.series {
                let Some(value) = series
                    .x
                    .iter()
                    .position(|x| x == category)
                    .and_then(|i| series.y.get(i).copied())
                else {
                    continue;
                };

                let len = self.bar_len(value, max);
                let bar = BAR.to_string().repeat(len);
                let pad = " ".repeat(self.width - len);
                let _ = writeln!(
                    out,
                    "  {:<label_width$}  {}{} {}",
                    series.name,
                    self.paint(&bar, series.color),
                    pad,
                    format_currency(value),
                );
            }
        }
        let _ = writeln!(out, "  ({})", chart.y_axis_title);
        out
    }

    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max.is_nan() || value.is_nan() || max <= 0.0 || value <= 0.0 {
            return 0;
        }
        let len = (value / max * self.width as f64).round() as usize;
        len.min(self.width)
    }

    fn paint(&self, text: &str, color: SeriesColor) -> String {
        if !self.color {
            return text.to_string();
        }
        match color {
            SeriesColor::Red => text.red().to_string(),
            SeriesColor::Green => text.green().to_string(),
        }
    }

    fn heading(&self, title: &str) -> String {
        if self.color {
            header(title)
        } else {
            format!("\n{}", title)
        }
    }
}

fn control_rows(dashboard: &Dashboard) -> Vec<KeyValue> {
    ControlId::ALL
        .iter()
        .map(|&id| {
            let spec = id.spec();
            KeyValue::new(spec.label, dashboard.controls.get(id).to_string())
        })
        .collect()
}

fn metric_rows(dashboard: &Dashboard) -> Vec<KeyValue> {
    dashboard
        .metrics
        .iter()
        .map(|m| KeyValue::new(m.label.as_str(), m.display.as_str()))
        .collect()
}

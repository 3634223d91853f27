//! Dashboard command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ropr_dashboard::Dashboard;

use crate::cli::OutputFormat;
use crate::commands::{ModelArgs, RunContext};
use crate::output::print_output;

/// Arguments for the dashboard command.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Bar chart width in characters (overrides the saved setting)
    #[arg(long, value_parser = clap::value_parser!(u16).range(10..=200))]
    pub width: Option<u16>,
}

#[derive(Debug, Serialize, Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    label: String,
    #[tabled(rename = "Value")]
    display: String,
    #[tabled(skip)]
    value: f64,
}

/// Execute the dashboard command.
pub fn execute(args: DashboardArgs, ctx: &RunContext) -> Result<()> {
    let controls = args.model.controls(&ctx.settings);
    let dashboard = Dashboard::build(&controls);

    match ctx.format {
        OutputFormat::Table => {
            let mut renderer = ctx.renderer();
            if let Some(width) = args.width {
                renderer.width = usize::from(width);
            }
            print!("{}", renderer.render(&dashboard));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<MetricRow> = dashboard
                .metrics
                .iter()
                .map(|m| MetricRow {
                    label: m.label.clone(),
                    display: m.display.clone(),
                    value: m.value,
                })
                .collect();
            print_output(&rows, OutputFormat::Csv)?;
        }
        OutputFormat::Minimal => {
            for metric in &dashboard.metrics {
                println!("{}: {}", metric.label, metric.display);
            }
        }
    }

    Ok(())
}

//! Sensitivity command implementation.
//!
//! Sweeps one percentage input and tabulates the outputs.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ropr_core::sensitivity::{break_even_effectiveness, sweep, SweepAxis, SweepSpec};
use ropr_dashboard::{format_currency, format_multiple};

use crate::cli::OutputFormat;
use crate::commands::{ModelArgs, RunContext};
use crate::output::{print_header, print_info, print_output};

/// Arguments for the sensitivity command.
#[derive(Args, Debug)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Input to vary: exposure or effectiveness
    #[arg(short, long, default_value = "effectiveness")]
    pub axis: SweepAxis,

    /// First value (percent)
    #[arg(long, default_value = "0")]
    pub start: f64,

    /// Last value (percent, inclusive)
    #[arg(long, default_value = "100")]
    pub end: f64,

    /// Step between values
    #[arg(long, default_value = "10")]
    pub step: f64,
}

/// One row of the sweep.
#[derive(Debug, Serialize, Tabled)]
struct SweepRow {
    #[tabled(rename = "Value (%)")]
    value: f64,
    #[tabled(rename = "Revenue at Risk", display_with = "currency")]
    revenue_at_risk: f64,
    #[tabled(rename = "Avoided Loss", display_with = "currency")]
    avoided_loss: f64,
    #[tabled(rename = "ROPR", display_with = "multiple")]
    ropr: f64,
}

fn currency(value: &f64) -> String {
    format_currency(*value)
}

fn multiple(value: &f64) -> String {
    format_multiple(*value)
}

/// Execute the sensitivity command.
pub fn execute(args: SensitivityArgs, ctx: &RunContext) -> Result<()> {
    let inputs = args.model.controls(&ctx.settings).to_inputs();
    let spec = SweepSpec::new(args.axis)
        .with_range(args.start, args.end)
        .with_step(args.step);

    let points = sweep(inputs, &spec)?;
    let break_even = break_even_effectiveness(&inputs);

    let rows: Vec<SweepRow> = points
        .iter()
        .map(|p| SweepRow {
            value: p.value,
            revenue_at_risk: p.outputs.revenue_at_risk,
            avoided_loss: p.outputs.avoided_loss,
            ropr: p.outputs.return_on_risk_prevention,
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!(
                    "Sensitivity to {} (current: {}%)",
                    args.axis,
                    args.axis.value_of(&inputs)
                ));
            }
            print_output(&rows, OutputFormat::Table)?;
            if !ctx.quiet {
                match break_even {
                    Some(pct) if pct <= 100.0 => {
                        print_info(&format!("Break-even effectiveness: {:.2}%", pct))
                    }
                    Some(pct) => print_info(&format!(
                        "Break-even effectiveness: {:.2}% (not reachable)",
                        pct
                    )),
                    None => print_info("Break-even effectiveness: n/a"),
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "axis": spec.axis,
                "start": spec.start,
                "end": spec.end,
                "step": spec.step,
                "points": points,
                "breakEvenEffectiveness": break_even,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            print_output(&rows, OutputFormat::Csv)?;
        }
        OutputFormat::Minimal => match break_even {
            Some(pct) => println!("{:.2}", pct),
            None => println!("n/a"),
        },
    }

    Ok(())
}

//! Compute command implementation.
//!
//! Runs the model once and prints inputs and outputs.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use ropr_core::{compute, RiskModelInputs, RiskModelOutputs};
use ropr_dashboard::format::format_percent;
use ropr_dashboard::{format_currency, format_multiple};

use crate::cli::OutputFormat;
use crate::commands::{ModelArgs, RunContext};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the compute command.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// One flat CSV record.
#[derive(Debug, Serialize)]
struct ComputeRecord {
    total_revenue: f64,
    cyber_investment: f64,
    bcdr_investment: f64,
    risk_exposure_percent: f64,
    risk_mitigation_effectiveness: f64,
    total_protective_investment: f64,
    revenue_at_risk: f64,
    avoided_loss: f64,
    return_on_risk_prevention: f64,
}

impl ComputeRecord {
    fn new(inputs: &RiskModelInputs, outputs: &RiskModelOutputs) -> Self {
        Self {
            total_revenue: inputs.total_revenue,
            cyber_investment: inputs.cyber_investment,
            bcdr_investment: inputs.bcdr_investment,
            risk_exposure_percent: inputs.risk_exposure_percent,
            risk_mitigation_effectiveness: inputs.risk_mitigation_effectiveness,
            total_protective_investment: outputs.total_protective_investment,
            revenue_at_risk: outputs.revenue_at_risk,
            avoided_loss: outputs.avoided_loss,
            return_on_risk_prevention: outputs.return_on_risk_prevention,
        }
    }
}

/// Execute the compute command.
pub fn execute(args: ComputeArgs, ctx: &RunContext) -> Result<()> {
    let inputs = args.model.controls(&ctx.settings).to_inputs();
    let outputs = compute(inputs);

    info!(
        revenue_at_risk = outputs.revenue_at_risk,
        avoided_loss = outputs.avoided_loss,
        ropr = outputs.return_on_risk_prevention,
        "computed"
    );

    match ctx.format {
        OutputFormat::Table => {
            let mut results = Vec::new();

            // Inputs
            results.push(KeyValue::new("Total Revenue", format_currency(inputs.total_revenue)));
            results.push(KeyValue::new(
                "Cybersecurity Investment",
                format_currency(inputs.cyber_investment),
            ));
            results.push(KeyValue::new(
                "BC/DR Investment",
                format_currency(inputs.bcdr_investment),
            ));
            results.push(KeyValue::new(
                "Risk Exposure",
                format_percent(inputs.risk_exposure_percent),
            ));
            results.push(KeyValue::new(
                "Mitigation Effectiveness",
                format_percent(inputs.risk_mitigation_effectiveness),
            ));
            results.push(KeyValue::new("", "")); // Separator

            // Outputs
            results.push(KeyValue::new(
                "Total Protective Investment",
                format_currency(outputs.total_protective_investment),
            ));
            results.push(KeyValue::new(
                "Revenue at Risk",
                format_currency(outputs.revenue_at_risk),
            ));
            results.push(KeyValue::new(
                "Avoided Revenue Loss",
                format_currency(outputs.avoided_loss),
            ));
            results.push(KeyValue::new(
                "ROPR (Return on Risk Prevention)",
                format_multiple(outputs.return_on_risk_prevention),
            ));

            if !ctx.quiet {
                print_header("Return on Risk Prevention");
            }
            print_output(&results, OutputFormat::Table)?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "inputs": inputs,
                "outputs": outputs,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            print_output_csv(&ComputeRecord::new(&inputs, &outputs))?;
        }
        OutputFormat::Minimal => {
            println!("{:.2}", outputs.return_on_risk_prevention);
        }
    }

    Ok(())
}

fn print_output_csv(record: &ComputeRecord) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

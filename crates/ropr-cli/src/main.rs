//! ROPR CLI - revenue-at-risk and Return on Risk Prevention dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Compute with the widget defaults
//! ropr compute
//!
//! # Full dashboard for a $250M company
//! ropr dashboard --revenue 250 --cyber 2000 --bcdr 800 --exposure 35
//!
//! # How ROPR moves with mitigation effectiveness
//! ropr sensitivity --axis effectiveness --step 5
//!
//! # Re-render on every change
//! ropr interactive
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod render;
mod settings;

use cli::{Cli, Commands};
use commands::RunContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let ctx = RunContext::from_cli(&cli)?;

    // Execute command
    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args, &ctx)?,
        Commands::Dashboard(args) => commands::dashboard::execute(args, &ctx)?,
        Commands::Sensitivity(args) => commands::sensitivity::execute(args, &ctx)?,
        Commands::Interactive(args) => commands::interactive::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

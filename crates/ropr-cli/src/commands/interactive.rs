//! Interactive command implementation.
//!
//! Reads `key=value` edits from stdin and re-renders the dashboard after
//! every change. The model is re-run from scratch on each frame.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use tracing::debug;

use ropr_dashboard::{ControlId, Controls, Dashboard};

use crate::cli::OutputFormat;
use crate::commands::{ModelArgs, RunContext};
use crate::render::TextRenderer;

/// Arguments for the interactive command.
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// How each frame is written.
#[derive(Debug, Clone, Copy)]
pub enum FrameStyle {
    /// Text dashboard.
    Text(TextRenderer),
    /// One JSON dashboard per line.
    Json,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Edits(Vec<(String, String)>),
    Show,
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => return Command::Empty,
        "show" => return Command::Show,
        "reset" => return Command::Reset,
        "help" | "?" => return Command::Help,
        "quit" | "exit" | "q" => return Command::Quit,
        _ => {}
    }

    let mut edits = Vec::new();
    for token in trimmed.split_whitespace() {
        match token.split_once('=') {
            Some((key, value)) => edits.push((key.to_string(), value.to_string())),
            None => return Command::Unknown(token.to_string()),
        }
    }
    Command::Edits(edits)
}

fn help_text() -> String {
    let keys: Vec<&str> = ControlId::ALL.iter().map(|id| id.alias()).collect();
    format!(
        "Enter key=value to change an input ({}), or: show, reset, help, quit",
        keys.join(", ")
    )
}

/// Reactive loop: render, read a line, apply it, render again.
///
/// Returns the controls in effect when the input ends.
pub fn run_session<R: BufRead, W: Write>(
    initial: Controls,
    style: FrameStyle,
    prompt: bool,
    input: R,
    out: &mut W,
) -> io::Result<Controls> {
    let mut controls = initial.clamped();
    write_frame(&controls, style, out)?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", help_text())?,
            Command::Show => write_frame(&controls, style, out)?,
            Command::Reset => {
                controls = initial.clamped();
                write_frame(&controls, style, out)?;
            }
            Command::Unknown(token) => {
                writeln!(out, "✗ Unrecognized input '{}'. {}", token, help_text())?;
            }
            Command::Edits(edits) => {
                let mut changed = false;
                for (key, value) in edits {
                    match controls.apply(&key, &value) {
                        Ok(id) => {
                            debug!(control = %id, value = controls.get(id), "control changed");
                            changed = true;
                        }
                        Err(e) => writeln!(out, "✗ {}", e)?,
                    }
                }
                if changed {
                    write_frame(&controls, style, out)?;
                }
            }
        }
    }

    Ok(controls)
}

fn write_frame<W: Write>(controls: &Controls, style: FrameStyle, out: &mut W) -> io::Result<()> {
    let dashboard = Dashboard::build(controls);
    match style {
        FrameStyle::Text(renderer) => write!(out, "{}", renderer.render(&dashboard)),
        FrameStyle::Json => {
            let line = serde_json::to_string(&dashboard).map_err(io::Error::other)?;
            writeln!(out, "{}", line)
        }
    }
}

/// Execute the interactive command.
pub fn execute(args: InteractiveArgs, ctx: &RunContext) -> Result<()> {
    let controls = args.model.controls(&ctx.settings);
    let style = match ctx.format {
        OutputFormat::Json => FrameStyle::Json,
        _ => FrameStyle::Text(ctx.renderer()),
    };
    let prompt = !ctx.quiet && matches!(style, FrameStyle::Text(_));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(controls, style, prompt, stdin.lock(), &mut out)?;
    Ok(())
}

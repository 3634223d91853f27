//! CLI command implementations.

pub mod compute;
pub mod config;
pub mod dashboard;
pub mod interactive;
pub mod sensitivity;

// Re-export submodules for convenience
pub use compute::ComputeArgs;
pub use config::ConfigArgs;
pub use dashboard::DashboardArgs;
pub use interactive::InteractiveArgs;
pub use sensitivity::SensitivityArgs;

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use ropr_dashboard::{ControlId, Controls};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;
use crate::render::TextRenderer;
use crate::settings::{self, Settings};

/// Settings resolved once per invocation.
#[derive(Debug)]
pub struct RunContext {
    /// Effective output format.
    pub format: OutputFormat,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Whether to emit colors.
    pub color: bool,
    /// Location of the settings file.
    pub config_path: PathBuf,
    /// Saved settings.
    pub settings: Settings,
}

impl RunContext {
    /// Loads saved settings and merges them with the global flags.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => settings::default_path()?,
        };
        let settings = Settings::load(&config_path)?;

        let format = cli.format.or_else(|| settings.format()).unwrap_or_default();
        let color = !cli.no_color && settings.use_colors();
        if !color {
            colored::control::set_override(false);
        }

        debug!(path = %config_path.display(), ?format, color, "resolved settings");

        Ok(Self {
            format,
            quiet: cli.quiet,
            color,
            config_path,
            settings,
        })
    }

    /// Text renderer configured from the settings.
    pub fn renderer(&self) -> TextRenderer {
        TextRenderer::new(self.settings.chart_width(), self.color)
    }
}

/// Model inputs shared by the calculation commands.
///
/// Omitted flags fall back to saved defaults, then to the widget defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Total annual revenue, in $M
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub revenue: Option<i64>,

    /// Annual cybersecurity investment, in $K
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub cyber: Option<i64>,

    /// Annual BC/DR investment, in $K
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub bcdr: Option<i64>,

    /// Percent of revenue at risk without protection (0-100)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=100))]
    pub exposure: Option<i64>,

    /// Effectiveness of the spend in reducing risk, in percent (0-100)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=100))]
    pub effectiveness: Option<i64>,
}

impl ModelArgs {
    /// Resolves the controls for this invocation.
    pub fn controls(&self, settings: &Settings) -> Controls {
        let mut controls = settings.controls();
        let flags = [
            (ControlId::RevenueMillions, self.revenue),
            (ControlId::CyberThousands, self.cyber),
            (ControlId::BcdrThousands, self.bcdr),
            (ControlId::ExposurePercent, self.exposure),
            (ControlId::EffectivenessPercent, self.effectiveness),
        ];
        for (id, value) in flags {
            if let Some(value) = value {
                controls.set(id, value);
            }
        }

        let controls = controls.clamped();
        debug!(?controls, "resolved controls");
        controls
    }
}

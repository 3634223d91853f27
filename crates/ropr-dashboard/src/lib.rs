//! # ROPR Dashboard
//!
//! The two collaborators around the risk model:
//!
//! - **Controls**: the five input widgets, their bounds and defaults, basic
//!   range clamping and the "millions" / "thousands" scaling into
//!   [`RiskModelInputs`](ropr_core::RiskModelInputs)
//! - **View**: the three headline metrics, the grouped bar chart and the
//!   explanation text, as a serializable [`Dashboard`]
//!
//! Front ends (terminal, HTTP) only render a [`Dashboard`]; they never touch
//! the arithmetic.
//!
//! # Example
//!
//! ```rust
//! use ropr_dashboard::{Controls, Dashboard};
//!
//! let dashboard = Dashboard::build(&Controls::default());
//! assert_eq!(dashboard.metrics[0].display, "$40,000,000");
//! assert_eq!(dashboard.metrics[2].display, "19.00x");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod chart;
pub mod controls;
pub mod format;
pub mod view;
mod error;

pub use chart::{BarMode, BarSeries, GroupedBarChart, SeriesColor};
pub use controls::{ControlId, ControlKind, ControlSpec, Controls};
pub use error::{DashboardError, DashboardResult};
pub use format::{format_currency, format_multiple};
pub use view::{Dashboard, Explanation, Metric, MetricKind};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chart::GroupedBarChart;
    pub use crate::controls::{ControlId, Controls};
    pub use crate::error::{DashboardError, DashboardResult};
    pub use crate::view::{Dashboard, Metric};
}

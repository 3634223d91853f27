//! # ropr-core
//!
//! Revenue-at-risk model for protective (cybersecurity and BC/DR) spend.
//!
//! This crate provides the arithmetic core used by every ROPR front end:
//!
//! - **Model**: Revenue at risk, avoided loss and Return on Risk Prevention
//! - **Units**: The "millions" / "thousands" entry convention of the input widgets
//! - **Sensitivity**: Sweeps over one percentage input and the break-even effectiveness
//!
//! The model itself is a pure, total function. It performs no clamping and
//! never fails; range constraints belong to whoever collects the inputs.
//!
//! ## Example
//!
//! ```rust
//! use ropr_core::prelude::*;
//!
//! let inputs = RiskModelInputs::new(100_000_000.0)
//!     .with_cyber_investment(1_000_000.0)
//!     .with_bcdr_investment(500_000.0)
//!     .with_risk_exposure_percent(40.0)
//!     .with_risk_mitigation_effectiveness(75.0);
//!
//! let outputs = compute(inputs);
//! assert_eq!(outputs.revenue_at_risk, 40_000_000.0);
//! assert_eq!(outputs.avoided_loss, 30_000_000.0);
//! assert_eq!(outputs.return_on_risk_prevention, 19.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod model;
pub mod sensitivity;
pub mod units;
mod error;

pub use error::{RoprError, RoprResult};
pub use model::{compute, RiskModelInputs, RiskModelOutputs};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::model::*;
    pub use crate::sensitivity::*;
    pub use crate::units::Scale;
    pub use crate::{RoprError, RoprResult};
}

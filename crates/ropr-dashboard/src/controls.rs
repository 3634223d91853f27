//! Input widgets.
//!
//! Revenue is entered in whole millions, investments in whole thousands and
//! the two percentages on 0–100 sliders. Clamping to the widget bounds is the
//! only validation applied anywhere; the model itself accepts any value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ropr_core::units::Scale;
use ropr_core::RiskModelInputs;

use crate::error::{DashboardError, DashboardResult};

/// Sidebar header shown above the controls.
pub const CONTROLS_HEADER: &str = "Model Inputs";

/// Identifies one input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    /// Total annual revenue, in millions.
    RevenueMillions,
    /// Annual cybersecurity investment, in thousands.
    CyberThousands,
    /// Annual BC/DR investment, in thousands.
    BcdrThousands,
    /// Share of revenue at risk without protection.
    ExposurePercent,
    /// Effectiveness of the spend in reducing risk.
    EffectivenessPercent,
}

/// Widget style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Free numeric entry with a lower bound.
    Number,
    /// Bounded slider.
    Slider,
}

/// Static description of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlSpec {
    /// Widget identifier.
    pub id: ControlId,
    /// Label shown next to the widget.
    pub label: &'static str,
    /// Widget style.
    pub kind: ControlKind,
    /// Multiplier applied before the value reaches the model.
    pub scale: Scale,
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value, if bounded.
    pub max: Option<i64>,
    /// Increment of the entry widget.
    pub step: i64,
    /// Initial value.
    pub default: i64,
}

impl ControlSpec {
    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: i64) -> i64 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

impl ControlId {
    /// All controls, in display order.
    pub const ALL: [ControlId; 5] = [
        ControlId::RevenueMillions,
        ControlId::CyberThousands,
        ControlId::BcdrThousands,
        ControlId::ExposurePercent,
        ControlId::EffectivenessPercent,
    ];

    /// Canonical key.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::RevenueMillions => "revenue_millions",
            ControlId::CyberThousands => "cyber_thousands",
            ControlId::BcdrThousands => "bcdr_thousands",
            ControlId::ExposurePercent => "exposure_percent",
            ControlId::EffectivenessPercent => "effectiveness_percent",
        }
    }

    /// Short alias accepted wherever a key is parsed.
    pub fn alias(self) -> &'static str {
        match self {
            ControlId::RevenueMillions => "revenue",
            ControlId::CyberThousands => "cyber",
            ControlId::BcdrThousands => "bcdr",
            ControlId::ExposurePercent => "exposure",
            ControlId::EffectivenessPercent => "effectiveness",
        }
    }

    /// Widget description.
    pub fn spec(self) -> ControlSpec {
        match self {
            ControlId::RevenueMillions => ControlSpec {
                id: self,
                label: "Total Annual Revenue ($M)",
                kind: ControlKind::Number,
                scale: Scale::Millions,
                min: 1,
                max: None,
                step: 1,
                default: 100,
            },
            ControlId::CyberThousands => ControlSpec {
                id: self,
                label: "Annual Cybersecurity Investment ($K)",
                kind: ControlKind::Number,
                scale: Scale::Thousands,
                min: 0,
                max: None,
                step: 100,
                default: 1000,
            },
            ControlId::BcdrThousands => ControlSpec {
                id: self,
                label: "Annual BC/DR Investment ($K)",
                kind: ControlKind::Number,
                scale: Scale::Thousands,
                min: 0,
                max: None,
                step: 100,
                default: 500,
            },
            ControlId::ExposurePercent => ControlSpec {
                id: self,
                label: "% of Revenue at Risk without Protection",
                kind: ControlKind::Slider,
                scale: Scale::Units,
                min: 0,
                max: Some(100),
                step: 1,
                default: 40,
            },
            ControlId::EffectivenessPercent => ControlSpec {
                id: self,
                label: "Effectiveness of Cyber/BC Spend in Risk Reduction (%)",
                kind: ControlKind::Slider,
                scale: Scale::Units,
                min: 0,
                max: Some(100),
                step: 1,
                default: 75,
            },
        }
    }

    /// Specs of all controls, in display order.
    pub fn specs() -> Vec<ControlSpec> {
        Self::ALL.iter().map(|id| id.spec()).collect()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == key || id.alias() == key)
            .ok_or_else(|| DashboardError::UnknownControl(s.trim().to_string()))
    }
}

/// Raw widget values as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Total annual revenue, in millions.
    #[serde(alias = "revenue")]
    pub revenue_millions: i64,
    /// Annual cybersecurity investment, in thousands.
    #[serde(alias = "cyber")]
    pub cyber_thousands: i64,
    /// Annual BC/DR investment, in thousands.
    #[serde(alias = "bcdr")]
    pub bcdr_thousands: i64,
    /// Share of revenue at risk without protection.
    #[serde(alias = "exposure")]
    pub exposure_percent: i64,
    /// Effectiveness of the spend in reducing risk.
    #[serde(alias = "effectiveness")]
    pub effectiveness_percent: i64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            revenue_millions: ControlId::RevenueMillions.spec().default,
            cyber_thousands: ControlId::CyberThousands.spec().default,
            bcdr_thousands: ControlId::BcdrThousands.spec().default,
            exposure_percent: ControlId::ExposurePercent.spec().default,
            effectiveness_percent: ControlId::EffectivenessPercent.spec().default,
        }
    }
}

impl Controls {
    /// Reads one control.
    pub fn get(&self, id: ControlId) -> i64 {
        match id {
            ControlId::RevenueMillions => self.revenue_millions,
            ControlId::CyberThousands => self.cyber_thousands,
            ControlId::BcdrThousands => self.bcdr_thousands,
            ControlId::ExposurePercent => self.exposure_percent,
            ControlId::EffectivenessPercent => self.effectiveness_percent,
        }
    }

    /// Writes one control as-is (no clamping).
    pub fn set(&mut self, id: ControlId, value: i64) {
        let slot = match id {
            ControlId::RevenueMillions => &mut self.revenue_millions,
            ControlId::CyberThousands => &mut self.cyber_thousands,
            ControlId::BcdrThousands => &mut self.bcdr_thousands,
            ControlId::ExposurePercent => &mut self.exposure_percent,
            ControlId::EffectivenessPercent => &mut self.effectiveness_percent,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, id: ControlId, value: i64) -> Self {
        self.set(id, value);
        self
    }

    /// Parses `key` and `value` and updates that control, clamped to its bounds.
    ///
    /// Returns the control that changed.
    pub fn apply(&mut self, key: &str, value: &str) -> DashboardResult<ControlId> {
        let id: ControlId = key.parse()?;
        let parsed: i64 = value
            .trim()
            .parse()
            .map_err(|_| DashboardError::InvalidValue {
                control: id.as_str().to_string(),
                value: value.trim().to_string(),
            })?;
        self.set(id, id.spec().clamp(parsed));
        Ok(id)
    }

    /// Returns a copy with every control clamped to its widget bounds.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for id in ControlId::ALL {
            out.set(id, id.spec().clamp(self.get(id)));
        }
        out
    }

    /// Clamps, scales and converts into model inputs.
    pub fn to_inputs(&self) -> RiskModelInputs {
        let c = self.clamped();
        let scaled = |id: ControlId| id.spec().scale.to_amount(c.get(id) as f64);

        RiskModelInputs {
            total_revenue: scaled(ControlId::RevenueMillions),
            cyber_investment: scaled(ControlId::CyberThousands),
            bcdr_investment: scaled(ControlId::BcdrThousands),
            risk_exposure_percent: scaled(ControlId::ExposurePercent),
            risk_mitigation_effectiveness: scaled(ControlId::EffectivenessPercent),
        }
    }
}

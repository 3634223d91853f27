//! Sensitivity of the model to one percentage input.
//!
//! A sweep re-runs [`compute`] with either the exposure or the effectiveness
//! percentage replaced by each value of an inclusive range. The break-even
//! effectiveness is the point where avoided loss equals the investment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{compute, RiskModelInputs, RiskModelOutputs};
use crate::{RoprError, RoprResult};

/// Upper bound on the number of points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 10_001;

/// Percentage input varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepAxis {
    /// Risk exposure percentage.
    Exposure,
    /// Mitigation effectiveness percentage.
    Effectiveness,
}

impl SweepAxis {
    /// Returns a copy of `inputs` with this axis set to `value`.
    pub fn apply(self, inputs: RiskModelInputs, value: f64) -> RiskModelInputs {
        match self {
            SweepAxis::Exposure => inputs.with_risk_exposure_percent(value),
            SweepAxis::Effectiveness => inputs.with_risk_mitigation_effectiveness(value),
        }
    }

    /// Reads this axis from `inputs`.
    pub fn value_of(self, inputs: &RiskModelInputs) -> f64 {
        match self {
            SweepAxis::Exposure => inputs.risk_exposure_percent,
            SweepAxis::Effectiveness => inputs.risk_mitigation_effectiveness,
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepAxis::Exposure => f.write_str("exposure"),
            SweepAxis::Effectiveness => f.write_str("effectiveness"),
        }
    }
}

impl FromStr for SweepAxis {
    type Err = RoprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exposure" => Ok(SweepAxis::Exposure),
            "effectiveness" => Ok(SweepAxis::Effectiveness),
            other => Err(RoprError::invalid_sweep(format!(
                "unknown axis '{other}': use exposure or effectiveness"
            ))),
        }
    }
}

/// An inclusive range of percentage values along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    /// Input being varied.
    pub axis: SweepAxis,
    /// First value (percent).
    #[serde(default)]
    pub start: f64,
    /// Last value (percent), always included.
    #[serde(default = "default_end")]
    pub end: f64,
    /// Distance between consecutive values.
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_end() -> f64 {
    100.0
}

fn default_step() -> f64 {
    10.0
}

impl SweepSpec {
    /// Full 0–100 sweep in steps of 10.
    pub fn new(axis: SweepAxis) -> Self {
        Self {
            axis,
            start: 0.0,
            end: default_end(),
            step: default_step(),
        }
    }

    /// Sets the range bounds.
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Checks the range and step.
    pub fn validate(&self) -> RoprResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(RoprError::invalid_sweep(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        for (name, bound) in [("start", self.start), ("end", self.end)] {
            if !(0.0..=100.0).contains(&bound) {
                return Err(RoprError::invalid_sweep(format!(
                    "{name} must be between 0 and 100, got {bound}"
                )));
            }
        }
        if self.start > self.end {
            return Err(RoprError::invalid_sweep(format!(
                "start ({}) is greater than end ({})",
                self.start, self.end
            )));
        }
        if (self.end - self.start) / self.step >= MAX_SWEEP_POINTS as f64
            || self.point_count() > MAX_SWEEP_POINTS
        {
            return Err(RoprError::invalid_sweep(format!(
                "step {} produces more than {} points",
                self.step, MAX_SWEEP_POINTS
            )));
        }
        Ok(())
    }

    /// Whole steps from `start` that stay within `end`.
    fn whole_steps(&self) -> usize {
        ((self.end - self.start) / self.step + 1e-9).floor() as usize
    }

    /// Whether `end` falls between grid points and is appended.
    fn appends_end(&self, steps: usize) -> bool {
        let last = self.start + steps as f64 * self.step;
        (self.end - last).abs() > 1e-9
    }

    /// Number of values [`values`](Self::values) returns.
    fn point_count(&self) -> usize {
        let steps = self.whole_steps();
        steps + 1 + usize::from(self.appends_end(steps))
    }

    /// Returns the swept values, `start` through `end` inclusive.
    pub fn values(&self) -> RoprResult<Vec<f64>> {
        self.validate()?;

        // Values are computed from the index to avoid accumulated drift.
        let steps = self.whole_steps();
        let mut values: Vec<f64> = (0..=steps)
            .map(|i| self.start + i as f64 * self.step)
            .collect();

        if self.appends_end(steps) {
            values.push(self.end);
        } else if let Some(slot) = values.last_mut() {
            *slot = self.end;
        }
        Ok(values)
    }
}

/// Model outputs at one swept value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    /// Value of the swept input (percent).
    pub value: f64,
    /// Model outputs at that value.
    pub outputs: RiskModelOutputs,
}

/// Runs the model once for every value of `spec`, holding the other inputs fixed.
pub fn sweep(base: RiskModelInputs, spec: &SweepSpec) -> RoprResult<Vec<SensitivityPoint>> {
    let points = spec
        .values()?
        .into_iter()
        .map(|value| SensitivityPoint {
            value,
            outputs: compute(spec.axis.apply(base, value)),
        })
        .collect();
    Ok(points)
}

/// Mitigation effectiveness (percent) at which avoided loss equals the
/// protective investment, i.e. ROPR = 0.
///
/// Returns `None` when there is no positive investment or no revenue at risk.
/// A result above 100 means the investment cannot pay for itself.
pub fn break_even_effectiveness(inputs: &RiskModelInputs) -> Option<f64> {
    let outputs = compute(*inputs);
    if outputs.total_protective_investment <= 0.0 || outputs.revenue_at_risk <= 0.0 {
        return None;
    }
    Some(outputs.total_protective_investment * 100.0 / outputs.revenue_at_risk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> RiskModelInputs {
        RiskModelInputs::new(100_000_000.0)
            .with_cyber_investment(1_000_000.0)
            .with_bcdr_investment(500_000.0)
            .with_risk_exposure_percent(40.0)
            .with_risk_mitigation_effectiveness(75.0)
    }

    #[test]
    fn test_values_include_both_ends() {
        let values = SweepSpec::new(SweepAxis::Effectiveness).values().unwrap();
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[10], 100.0);
    }

    #[test]
    fn test_values_append_uneven_end() {
        let values = SweepSpec::new(SweepAxis::Exposure)
            .with_range(0.0, 25.0)
            .with_step(10.0)
            .values()
            .unwrap();
        assert_eq!(values, vec![0.0, 10.0, 20.0, 25.0]);
    }

    #[test]
    fn test_single_point_sweep() {
        let values = SweepSpec::new(SweepAxis::Exposure)
            .with_range(40.0, 40.0)
            .values()
            .unwrap();
        assert_eq!(values, vec![40.0]);
    }

    #[test]
    fn test_fractional_step_has_no_drift() {
        let values = SweepSpec::new(SweepAxis::Exposure)
            .with_range(0.0, 1.0)
            .with_step(0.1)
            .values()
            .unwrap();
        assert_eq!(values.len(), 11);
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_specs() {
        let spec = SweepSpec::new(SweepAxis::Exposure);
        assert!(spec.with_step(0.0).validate().is_err());
        assert!(spec.with_step(-5.0).validate().is_err());
        assert!(spec.with_range(50.0, 10.0).validate().is_err());
        assert!(spec.with_range(0.0, 120.0).validate().is_err());
        assert!(spec.with_range(-1.0, 10.0).validate().is_err());
        assert!(spec.with_step(1e-6).validate().is_err());
    }

    #[test]
    fn test_point_cap_counts_appended_end() {
        let uneven = SweepSpec::new(SweepAxis::Exposure).with_step(100.0 / 10_000.5);
        assert!(uneven.validate().is_err());
        assert!(uneven.values().is_err());

        let at_cap = SweepSpec::new(SweepAxis::Exposure).with_step(0.01);
        assert_eq!(at_cap.values().unwrap().len(), MAX_SWEEP_POINTS);

        let below_cap = SweepSpec::new(SweepAxis::Exposure).with_step(100.0 / 9_999.5);
        let values = below_cap.values().unwrap();
        assert_eq!(values.len(), MAX_SWEEP_POINTS);
        assert_eq!(*values.last().unwrap(), 100.0);
    }

    #[test]
    fn test_sweep_effectiveness() {
        let points = sweep(base(), &SweepSpec::new(SweepAxis::Effectiveness)).unwrap();

        assert_eq!(points.len(), 11);
        assert_eq!(points[0].outputs.avoided_loss, 0.0);
        assert_relative_eq!(points[0].outputs.return_on_risk_prevention, -1.0);
        assert_relative_eq!(points[10].outputs.avoided_loss, 40_000_000.0);

        for pair in points.windows(2) {
            assert!(pair[1].outputs.avoided_loss >= pair[0].outputs.avoided_loss);
            assert!(
                pair[1].outputs.return_on_risk_prevention
                    >= pair[0].outputs.return_on_risk_prevention
            );
        }
    }

    #[test]
    fn test_sweep_exposure_holds_other_inputs() {
        let points = sweep(base(), &SweepSpec::new(SweepAxis::Exposure)).unwrap();
        for point in &points {
            assert_relative_eq!(point.outputs.total_protective_investment, 1_500_000.0);
        }
        assert_relative_eq!(points[4].outputs.revenue_at_risk, 40_000_000.0);
    }

    #[test]
    fn test_break_even() {
        // 1.5M / 40M = 3.75%
        assert_eq!(break_even_effectiveness(&base()), Some(3.75));

        let at_break_even = base().with_risk_mitigation_effectiveness(3.75);
        assert_relative_eq!(
            compute(at_break_even).return_on_risk_prevention,
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_break_even_undefined() {
        let no_investment = base().with_cyber_investment(0.0).with_bcdr_investment(0.0);
        assert_eq!(break_even_effectiveness(&no_investment), None);

        let no_exposure = base().with_risk_exposure_percent(0.0);
        assert_eq!(break_even_effectiveness(&no_exposure), None);
    }

    #[test]
    fn test_break_even_above_hundred() {
        let small = base().with_total_revenue(1_000_000.0);
        // 1.5M investment vs 400K at risk
        assert_relative_eq!(break_even_effectiveness(&small).unwrap(), 375.0);
    }

    #[test]
    fn test_axis_apply_and_read() {
        let inputs = SweepAxis::Exposure.apply(base(), 12.5);
        assert_eq!(SweepAxis::Exposure.value_of(&inputs), 12.5);
        assert_eq!(SweepAxis::Effectiveness.value_of(&inputs), 75.0);
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("Exposure".parse::<SweepAxis>().unwrap(), SweepAxis::Exposure);
        assert!("revenue".parse::<SweepAxis>().is_err());
    }
}

//! Revenue-at-risk model.
//!
//! Maps five scalar inputs to the protective investment, revenue at risk,
//! avoided loss and Return on Risk Prevention (ROPR):
//!
//! ```text
//! investment     = cyber + bcdr
//! revenue_at_risk = revenue × (exposure% / 100)
//! avoided_loss    = revenue_at_risk × (effectiveness% / 100)
//! ROPR            = (avoided_loss − investment) / investment,  0 if investment = 0
//! ```
//!
//! All arithmetic is `f64` with no internal rounding. Inputs are not
//! validated: out-of-range percentages or negative amounts produce
//! out-of-range but well-defined outputs.

use serde::{Deserialize, Serialize};

/// Inputs to the risk model.
///
/// Monetary amounts are absolute (already scaled from the "millions" /
/// "thousands" entry fields). Percentages are in `[0, 100]` when collected
/// through the dashboard controls, but the model accepts any value.
///
/// Fields missing from serialized input default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskModelInputs {
    /// Total annual revenue.
    pub total_revenue: f64,
    /// Annual cybersecurity investment.
    pub cyber_investment: f64,
    /// Annual business-continuity / disaster-recovery investment.
    pub bcdr_investment: f64,
    /// Share of revenue at risk without protection, in percent.
    pub risk_exposure_percent: f64,
    /// Effectiveness of the protective spend in reducing risk, in percent.
    pub risk_mitigation_effectiveness: f64,
}

impl RiskModelInputs {
    /// Creates inputs for a company with the given total revenue and no
    /// investment or exposure.
    pub fn new(total_revenue: f64) -> Self {
        Self {
            total_revenue,
            ..Self::default()
        }
    }

    /// Sets the total revenue.
    pub fn with_total_revenue(mut self, amount: f64) -> Self {
        self.total_revenue = amount;
        self
    }

    /// Sets the cybersecurity investment.
    pub fn with_cyber_investment(mut self, amount: f64) -> Self {
        self.cyber_investment = amount;
        self
    }

    /// Sets the BC/DR investment.
    pub fn with_bcdr_investment(mut self, amount: f64) -> Self {
        self.bcdr_investment = amount;
        self
    }

    /// Sets the risk exposure percentage.
    pub fn with_risk_exposure_percent(mut self, percent: f64) -> Self {
        self.risk_exposure_percent = percent;
        self
    }

    /// Sets the mitigation effectiveness percentage.
    pub fn with_risk_mitigation_effectiveness(mut self, percent: f64) -> Self {
        self.risk_mitigation_effectiveness = percent;
        self
    }

    /// Runs the model on these inputs.
    pub fn compute(&self) -> RiskModelOutputs {
        compute(*self)
    }
}

/// Outputs of the risk model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskModelOutputs {
    /// Cyber plus BC/DR investment.
    pub total_protective_investment: f64,
    /// Portion of revenue exposed to loss absent protection.
    pub revenue_at_risk: f64,
    /// Portion of revenue at risk prevented by the investment.
    pub avoided_loss: f64,
    /// Net benefit per unit of investment, as a multiple.
    #[serde(alias = "ropr")]
    pub return_on_risk_prevention: f64,
}

impl RiskModelOutputs {
    /// Avoided loss minus protective investment.
    pub fn net_benefit(&self) -> f64 {
        self.avoided_loss - self.total_protective_investment
    }

    /// Revenue at risk that the investment does not cover.
    pub fn unmitigated_loss(&self) -> f64 {
        self.revenue_at_risk - self.avoided_loss
    }
}

/// Computes the model outputs for the given inputs.
///
/// Total and side-effect free. The only branch guards the ROPR division:
/// with no positive protective investment, ROPR is defined as `0`.
pub fn compute(inputs: RiskModelInputs) -> RiskModelOutputs {
    let total_protective_investment = inputs.cyber_investment + inputs.bcdr_investment;
    let revenue_at_risk = inputs.total_revenue * (inputs.risk_exposure_percent / 100.0);
    let avoided_loss = revenue_at_risk * (inputs.risk_mitigation_effectiveness / 100.0);

    let return_on_risk_prevention = if total_protective_investment > 0.0 {
        (avoided_loss - total_protective_investment) / total_protective_investment
    } else {
        0.0
    };

    RiskModelOutputs {
        total_protective_investment,
        revenue_at_risk,
        avoided_loss,
        return_on_risk_prevention,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_scenario() -> RiskModelInputs {
        RiskModelInputs {
            total_revenue: 100_000_000.0,
            cyber_investment: 1_000_000.0,
            bcdr_investment: 500_000.0,
            risk_exposure_percent: 40.0,
            risk_mitigation_effectiveness: 75.0,
        }
    }

    #[test]
    fn test_default_scenario() {
        let out = compute(default_scenario());

        assert_relative_eq!(out.total_protective_investment, 1_500_000.0);
        assert_relative_eq!(out.revenue_at_risk, 40_000_000.0);
        assert_relative_eq!(out.avoided_loss, 30_000_000.0);
        // (30M - 1.5M) / 1.5M
        assert_relative_eq!(out.return_on_risk_prevention, 19.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_revenue() {
        let out = compute(default_scenario().with_total_revenue(0.0));

        assert_eq!(out.revenue_at_risk, 0.0);
        assert_eq!(out.avoided_loss, 0.0);
        assert_relative_eq!(out.return_on_risk_prevention, -1.0);
    }

    #[test]
    fn test_no_investment() {
        let out = compute(
            default_scenario()
                .with_cyber_investment(0.0)
                .with_bcdr_investment(0.0),
        );

        assert_eq!(out.total_protective_investment, 0.0);
        assert!(out.avoided_loss > 0.0);
        assert_eq!(out.return_on_risk_prevention, 0.0);
    }

    #[test]
    fn test_zero_exposure() {
        let out = compute(default_scenario().with_risk_exposure_percent(0.0));
        assert_eq!(out.revenue_at_risk, 0.0);
        assert_eq!(out.avoided_loss, 0.0);
        assert_relative_eq!(out.return_on_risk_prevention, -1.0);

        let out = compute(
            default_scenario()
                .with_risk_exposure_percent(0.0)
                .with_cyber_investment(0.0)
                .with_bcdr_investment(0.0),
        );
        assert_eq!(out.return_on_risk_prevention, 0.0);
    }

    #[test]
    fn test_out_of_range_inputs_are_not_clamped() {
        let out = compute(
            default_scenario()
                .with_risk_exposure_percent(150.0)
                .with_risk_mitigation_effectiveness(-10.0),
        );

        assert_relative_eq!(out.revenue_at_risk, 150_000_000.0);
        assert_relative_eq!(out.avoided_loss, -15_000_000.0);
        assert!(out.return_on_risk_prevention < -1.0);
    }

    #[test]
    fn test_negative_investment_gives_zero_ropr() {
        let out = compute(default_scenario().with_cyber_investment(-2_000_000.0));
        assert_relative_eq!(out.total_protective_investment, -1_500_000.0);
        assert_eq!(out.return_on_risk_prevention, 0.0);
    }

    #[test]
    fn test_derived_readers() {
        let out = compute(default_scenario());
        assert_relative_eq!(out.net_benefit(), 28_500_000.0);
        assert_relative_eq!(out.unmitigated_loss(), 10_000_000.0);
    }

    #[test]
    fn test_method_matches_free_function() {
        let inputs = default_scenario();
        assert_eq!(inputs.compute(), compute(inputs));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(compute(default_scenario())).unwrap();
        assert!(json.get("totalProtectiveInvestment").is_some());
        assert!(json.get("revenueAtRisk").is_some());
        assert!(json.get("avoidedLoss").is_some());
        assert!(json.get("returnOnRiskPrevention").is_some());

        let inputs: RiskModelInputs = serde_json::from_str(
            r#"{"totalRevenue":1.0,"cyberInvestment":2.0,"bcdrInvestment":3.0,
                "riskExposurePercent":4.0,"riskMitigationEffectiveness":5.0}"#,
        )
        .unwrap();
        assert_eq!(inputs.bcdr_investment, 3.0);
        assert_eq!(inputs.risk_mitigation_effectiveness, 5.0);
    }

    #[test]
    fn test_partial_inputs_default_to_zero() {
        let inputs: RiskModelInputs = serde_json::from_str(
            r#"{"totalRevenue":5e7,"riskExposurePercent":20,"riskMitigationEffectiveness":50}"#,
        )
        .unwrap();
        assert_eq!(inputs.cyber_investment, 0.0);
        assert_eq!(inputs.bcdr_investment, 0.0);

        let outputs = compute(inputs);
        assert_eq!(outputs.total_protective_investment, 0.0);
        assert_eq!(outputs.avoided_loss, 5_000_000.0);
        assert_eq!(outputs.return_on_risk_prevention, 0.0);

        let empty: RiskModelInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RiskModelInputs::default());
    }
}
